//! Shared models and pure logic for `pingsweep`.
//!
//! * [`network`]: target classification and CIDR expansion.
//! * [`probe`]: probe requests, platform dialects and response parsing.
//! * [`config`] and [`error`]: settings and the error taxonomy used by every crate.

pub mod config;
pub mod error;
mod macros;
pub mod network;
pub mod probe;

#[doc(hidden)]
pub use tracing;
