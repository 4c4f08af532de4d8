//! Type-erased message payloads.


use alloc::{sync::Arc, vec::Vec};
use core::{
  any::{Any, type_name},
  fmt,
};

use serde::Serialize;

use crate::serialization::{SerializationError, bincode_codec};

/// Cheaply clonable, type-erased message payload.
///
/// Payloads built with [`Message::new`] keep a serialized form and can be put
/// on the wire; payloads built with [`Message::opaque`] are local-only and
/// surface [`SerializationError::NotSerializable`] when a proxy attempts to
/// ship them.
#[derive(Clone)]
pub struct Message {
  cell: Arc<dyn PayloadCell>,
}

trait PayloadCell: Send + Sync {
  fn as_any(&self) -> &(dyn Any + Send + Sync);

  fn manifest(&self) -> &'static str;

  fn serialize_view(&self) -> Option<&dyn erased_serde::Serialize>;
}

struct SerializableCell<T> {
  value: T,
}

impl<T> PayloadCell for SerializableCell<T>
where
  T: Serialize + Send + Sync + 'static,
{
  fn as_any(&self) -> &(dyn Any + Send + Sync) {
    &self.value
  }

  fn manifest(&self) -> &'static str {
    type_name::<T>()
  }

  fn serialize_view(&self) -> Option<&dyn erased_serde::Serialize> {
    Some(&self.value)
  }
}

struct OpaqueCell<T> {
  value: T,
}

impl<T> PayloadCell for OpaqueCell<T>
where
  T: Send + Sync + 'static,
{
  fn as_any(&self) -> &(dyn Any + Send + Sync) {
    &self.value
  }

  fn manifest(&self) -> &'static str {
    type_name::<T>()
  }

  fn serialize_view(&self) -> Option<&dyn erased_serde::Serialize> {
    None
  }
}

impl Message {
  /// Wraps a serializable payload.
  #[must_use]
  pub fn new<T>(value: T) -> Self
  where
    T: Serialize + Send + Sync + 'static, {
    Self { cell: Arc::new(SerializableCell { value }) }
  }

  /// Wraps a local-only payload without a serialized form.
  #[must_use]
  pub fn opaque<T>(value: T) -> Self
  where
    T: Send + Sync + 'static, {
    Self { cell: Arc::new(OpaqueCell { value }) }
  }

  /// Attempts to view the payload as a concrete type.
  #[must_use]
  pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
    self.cell.as_any().downcast_ref::<T>()
  }

  /// Indicates whether the payload is of type `T`.
  #[must_use]
  pub fn is<T: 'static>(&self) -> bool {
    self.downcast_ref::<T>().is_some()
  }

  /// Returns the payload's type manifest.
  #[must_use]
  pub fn manifest(&self) -> &'static str {
    self.cell.manifest()
  }

  /// Encodes the payload into its wire bytes.
  ///
  /// # Errors
  ///
  /// Returns [`SerializationError::NotSerializable`] for local-only payloads
  /// and [`SerializationError::EncodingFailed`] when encoding fails.
  pub fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
    match self.cell.serialize_view() {
      | Some(view) => bincode_codec::encode(view),
      | None => Err(SerializationError::NotSerializable { manifest: self.manifest() }),
    }
  }
}

impl fmt::Debug for Message {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Message")
      .field("manifest", &self.manifest())
      .field("serializable", &self.cell.serialize_view().is_some())
      .finish()
  }
}
