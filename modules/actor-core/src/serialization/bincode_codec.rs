//! Binary encoding helpers backed by `bincode`.

#[cfg(test)]
mod tests;

use alloc::{string::ToString, vec::Vec};

use bincode::config::Config;
use serde::{Serialize, de::DeserializeOwned};

use crate::serialization::error::SerializationError;

fn config() -> impl Config {
  bincode::config::standard().with_fixed_int_encoding()
}

/// Encodes a serde value with the runtime's fixed-int binary configuration.
///
/// # Errors
///
/// Returns [`SerializationError::EncodingFailed`] when `bincode` rejects the
/// value.
pub fn encode<T>(value: &T) -> Result<Vec<u8>, SerializationError>
where
  T: Serialize + ?Sized, {
  bincode::serde::encode_to_vec(value, config())
    .map_err(|error| SerializationError::EncodingFailed(error.to_string()))
}

/// Decodes a serde value from its wire bytes.
///
/// # Errors
///
/// Returns [`SerializationError::DecodingFailed`] when the buffer does not
/// contain a valid encoding of `T`.
pub fn decode<T>(bytes: &[u8]) -> Result<T, SerializationError>
where
  T: DeserializeOwned, {
  bincode::serde::decode_from_slice(bytes, config())
    .map(|(value, _)| value)
    .map_err(|error| SerializationError::DecodingFailed(error.to_string()))
}
