use crate::network::target::{Target, TargetKind};
use crate::probe::platform::Platform;

/// A target paired with the exact argument list handed to `ping`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTask {
    target: Target,
    args: Vec<String>,
    count: u32,
}

impl ProbeTask {
    /// Builds the invocation for `target`.
    ///
    /// * address: `[address, family flag, count flag, count]`
    /// * hostname: `[hostname, count flag, count]`
    ///
    /// Pure: the same inputs always produce the same arguments.
    pub fn build(target: Target, platform: Platform, count: u32) -> Self {
        let mut args: Vec<String> = vec![target.raw().to_string()];

        if let TargetKind::Address { family, .. } = target.kind() {
            args.push(Platform::family_flag(*family).to_string());
        }

        args.push(platform.count_flag().to_string());
        args.push(count.to_string());

        Self {
            target,
            args,
            count,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn into_target(self) -> Target {
        self.target
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
