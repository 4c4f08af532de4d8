#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![cfg_attr(not(test), no_std)]

//! Entry point crate for the proxima actor remoting workspace.
//!
//! Re-exports the member crates under stable module names so applications
//! can depend on a single crate: [`actor_core`] provides the runtime
//! surface, [`remote`] the proxy registry and the BASP wire proxy.

#[cfg(test)]
mod tests;

pub use proxima_actor_core_rs as actor_core;
pub use proxima_remote_rs as remote;

/// Returns the semantic version of the workspace.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
