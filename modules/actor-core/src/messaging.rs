//! Messaging package.
//!
//! Contains the type-erased payload model and the records moved through
//! mailboxes.

mod bounced_request;
mod exit_msg;
mod mailbox_record;
mod message;
mod message_id;

pub use bounced_request::BouncedRequest;
pub use exit_msg::ExitMsg;
pub use mailbox_record::MailboxRecord;
pub use message::Message;
pub use message_id::MessageId;
