pub mod sweep;

use std::time::Duration;

use clap::{CommandFactory, Parser};
use pingsweep_common::config::{self, Config};
use pingsweep_common::probe::platform::Platform;

#[derive(Parser)]
#[command(name = "pingsweep", version)]
#[command(about = "Concurrent ping sweep over a host or a CIDR block.")]
pub struct CommandLine {
    /// Host or IP address, e.g. -t 127.0.0.1 or -t example.com
    #[arg(short = 't', long, conflicts_with = "range")]
    pub target: Option<String>,

    /// Address block in CIDR notation, e.g. -i 192.168.1.0/24
    #[arg(short = 'i', long)]
    pub range: Option<String>,

    /// Echo requests per target
    #[arg(short = 'c', long, default_value_t = config::DEFAULT_COUNT,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Maximum probes in flight at once
    #[arg(long, default_value_t = config::DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Seconds of slack per probe, on top of one second per echo request
    #[arg(long, default_value_t = config::DEFAULT_PROBE_TIMEOUT.as_secs(),
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// OS identifier selecting the ping flag dialect (defaults to this system)
    #[arg(long)]
    pub platform: Option<String>,

    /// Ping program to invoke
    #[arg(long = "ping", default_value = config::DEFAULT_PING_PROGRAM)]
    pub ping_program: String,

    /// Refuse ranges holding more addresses than this
    #[arg(long, default_value_t = config::DEFAULT_MAX_TARGETS)]
    pub max_targets: usize,

    /// Only print the alive targets
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log every probe failure and state change
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn print_usage() -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }

    pub fn has_targets(&self) -> bool {
        self.target.is_some() || self.range.is_some()
    }

    pub fn to_config(&self) -> Config {
        let platform: Platform = match &self.platform {
            Some(id) => Platform::from_identifier(id),
            None => Platform::host(),
        };

        Config {
            count: self.count,
            platform,
            concurrency: self.concurrency,
            probe_timeout: Duration::from_secs(self.timeout),
            ping_program: self.ping_program.clone(),
            max_targets: self.max_targets,
            quiet: self.quiet,
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
