//! The boundary to whatever actually sends echo requests.
//!
//! The sweep only ever sees [`ProbeMechanism`], so the system `ping` utility
//! ([`system::SystemPing`]) can be swapped for a scripted fake in tests.

use async_trait::async_trait;
use pingsweep_common::error::ProbeError;
use pingsweep_common::probe::outcome::ProbeOutcome;
use pingsweep_common::probe::request::ProbeTask;
use tracing::{debug, trace};

pub mod system;

/// Runs one probe invocation and hands back its captured text output.
#[async_trait]
pub trait ProbeMechanism: Send + Sync {
    async fn run(&self, args: &[String]) -> Result<String, ProbeError>;
}

/// Executes `task` and classifies the result.
///
/// Mechanism failures never propagate: they become empty output, which
/// classifies as "no response".
pub async fn execute(mechanism: &dyn ProbeMechanism, task: ProbeTask) -> ProbeOutcome {
    let raw_output: String = match mechanism.run(task.args()).await {
        Ok(output) => output,
        Err(e) => {
            debug!(target_addr = %task.target(), error = %e, "probe failed, counting as no response");
            String::new()
        }
    };

    let outcome = ProbeOutcome::from_output(task.into_target(), raw_output);
    trace!(
        target_addr = %outcome.target(),
        bytes = outcome.raw_output().len(),
        alive = outcome.is_alive(),
        "probe classified"
    );
    outcome
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
