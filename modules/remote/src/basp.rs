//! BASP package.
//!
//! Contains the wire header model and the proxy actor that speaks the
//! protocol on behalf of remote actors.

mod message_kind;
mod proxy;
mod wire_header;
mod wire_record;

pub use message_kind::MessageKind;
pub use proxy::{BaspProxy, basp_proxy_factory};
pub use wire_header::WireHeader;
pub use wire_record::WireRecord;
