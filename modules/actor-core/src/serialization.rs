//! Serialization package.
//!
//! Contains the failure taxonomy and the binary codec shared by the wire
//! layer.

/// Binary encoding helpers backed by `bincode`.
pub mod bincode_codec;
mod error;

pub use error::SerializationError;
