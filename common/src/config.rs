use std::time::Duration;

use crate::probe::platform::Platform;

pub const DEFAULT_COUNT: u32 = 4;
pub const DEFAULT_CONCURRENCY: usize = 64;
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);
/// `ping` waits about a second between echo requests.
pub const ECHO_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_PING_PROGRAM: &str = "ping";
pub const DEFAULT_MAX_TARGETS: usize = 65_536;

#[derive(Debug, Clone)]
pub struct Config {
    /// Echo requests sent per target.
    pub count: u32,
    /// Selects the flag spelling handed to the ping utility.
    pub platform: Platform,
    /// Upper bound on probes in flight at once.
    pub concurrency: usize,
    /// Slack on top of the echo intervals; see [`Config::effective_probe_timeout`].
    pub probe_timeout: Duration,
    pub ping_program: String,
    /// Ranges expanding past this many addresses are refused.
    pub max_targets: usize,
    /// Only print report lines.
    pub quiet: bool,
}

impl Config {
    /// Wall-clock limit for one probe: `probe_timeout` plus one [`ECHO_INTERVAL`] per echo request.
    pub fn effective_probe_timeout(&self) -> Duration {
        self.probe_timeout.saturating_add(ECHO_INTERVAL.saturating_mul(self.count))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            platform: Platform::host(),
            concurrency: DEFAULT_CONCURRENCY,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            ping_program: DEFAULT_PING_PROGRAM.to_string(),
            max_targets: DEFAULT_MAX_TARGETS,
            quiet: false,
        }
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
