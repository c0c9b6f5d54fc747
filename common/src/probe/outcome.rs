//! Reading liveness out of raw `ping` output.
//!
//! Windows prints `Reply from 10.0.0.1: bytes=32 time<1ms TTL=128`, most
//! POSIX systems `64 bytes from 10.0.0.1: icmp_seq=1 ttl=64 time=0.04 ms`.
//! Both carry a TTL marker on reply lines only, which makes it the signal.

use crate::network::target::Target;

const MARKERS: [&str; 2] = ["TTL=", "ttl="];

/// Returns the first TTL fragment in `raw`, from the marker to the end of its line.
///
/// Whichever dialect's marker appears first wins. A marker with nothing after
/// it is not a signal.
pub fn parse_signal(raw: &str) -> Option<&str> {
    let start: usize = MARKERS.iter().filter_map(|marker| raw.find(marker)).min()?;

    let line: &str = raw[start..].lines().next()?;
    let fragment: &str = line.trim_end_matches('\r');

    if fragment.len() > MARKERS[0].len() {
        Some(fragment)
    } else {
        None
    }
}

/// The classified result of probing one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    target: Target,
    raw_output: String,
    signal: Option<String>,
}

impl ProbeOutcome {
    /// Classifies raw output for `target`. Empty output means no response.
    pub fn from_output(target: Target, raw_output: String) -> Self {
        let signal: Option<String> = parse_signal(&raw_output).map(str::to_string);
        Self {
            target,
            raw_output,
            signal,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn raw_output(&self) -> &str {
        &self.raw_output
    }

    pub fn signal(&self) -> Option<&str> {
        self.signal.as_deref()
    }

    pub fn is_alive(&self) -> bool {
        self.signal.is_some()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
