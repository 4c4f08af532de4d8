//! Mailbox package.
//!
//! Contains the single-consumer inbox used by cooperatively scheduled
//! actors.

mod inbox;
mod push_outcome;
mod round_outcome;

pub use inbox::Inbox;
pub use push_outcome::InboxPushOutcome;
pub use round_outcome::{RoundOutcome, TaskOutcome};
