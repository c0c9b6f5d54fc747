//! # pingsweep engine
//!
//! * [`probe`]: the probe mechanism seam, the system `ping` runner and the executor
//!   that turns a [`pingsweep_common::probe::request::ProbeTask`] into an outcome.
//! * [`sweep`]: the coordinator fanning probes out over a bounded pool.
//! * [`session`]: the state a single sweep owns.
//! * [`shutdown`]: cancellation for in-flight probes.

pub mod probe;
pub mod session;
pub mod shutdown;
pub mod sweep;
