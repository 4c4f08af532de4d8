//! Dead letter package.
//!
//! Contains the entries published for undeliverable messages.

mod dead_letter_entry;
mod dead_letter_reason;

pub use dead_letter_entry::DeadLetterEntry;
pub use dead_letter_reason::DeadLetterReason;
