use std::time::Duration;

use thiserror::Error;

/// Failures that stop targets from being derived at all.
///
/// These are the only errors allowed to abort a run. Everything that goes
/// wrong *per target* is handled by [`ProbeError`] and never escapes a worker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SweepError {
    #[error("invalid CIDR range '{input}': {reason}")]
    InvalidRange { input: String, reason: String },

    #[error("range {block} holds {size} addresses, more than the limit of {limit}")]
    RangeTooLarge {
        block: String,
        size: u128,
        limit: usize,
    },

    #[error("no targets to probe")]
    NoTargets,
}

impl SweepError {
    pub fn invalid_range(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure of the external probe mechanism for a single target.
///
/// Recovered locally as "no response".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("probe unavailable: {0}")]
    Unavailable(String),

    #[error("probe timed out after {0:?}")]
    TimedOut(Duration),
}
