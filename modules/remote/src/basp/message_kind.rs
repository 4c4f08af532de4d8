//! BASP operation codes.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Operation carried by a [`crate::basp::WireHeader`].
///
/// Proxies synthesize [`MessageKind::DispatchMessage`] headers; records with
/// other kinds reach a proxy only pre-serialized, built by the transport
/// layer, and pass through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
  /// A serialized actor-to-actor message.
  DispatchMessage,
  /// Requests termination of a proxy on the receiving node; used for exit
  /// propagation.
  KillProxy,
}

impl fmt::Display for MessageKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::DispatchMessage => write!(f, "dispatch_message"),
      | Self::KillProxy => write!(f, "kill_proxy"),
    }
  }
}
