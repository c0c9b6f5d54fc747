use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use pingsweep_common::config::Config;
use pingsweep_common::error::ProbeError;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, trace};

use super::ProbeMechanism;

/// Probes through the platform `ping` utility.
///
/// The child is killed if the probe outlives `timeout` or the sweep drops
/// the future. Output printed before the timeout is still returned.
pub struct SystemPing {
    program: String,
    timeout: Duration,
}

impl SystemPing {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.ping_program.clone(), cfg.effective_probe_timeout())
    }
}

#[async_trait]
impl ProbeMechanism for SystemPing {
    async fn run(&self, args: &[String]) -> Result<String, ProbeError> {
        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ProbeError::Unavailable(format!("{}: {e}", self.program)))?;

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| ProbeError::Unavailable(format!("{}: stdout not captured", self.program)))?;

        // each chunk lands in `captured` before the next await, so a timeout keeps it
        let mut captured: Vec<u8> = Vec::new();
        let finished = timeout(self.timeout, async {
            let mut chunk = [0u8; 1024];
            loop {
                let read: usize = stdout.read(&mut chunk).await?;
                if read == 0 {
                    break;
                }
                captured.extend_from_slice(&chunk[..read]);
            }
            child.wait().await
        })
        .await;

        match finished {
            Ok(Ok(status)) => {
                // ping exits non-zero when nothing answered; stdout is still worth reading
                trace!(program = %self.program, ?args, exit_code = ?status.code(), "probe exited");
            }
            Ok(Err(e)) => return Err(ProbeError::Unavailable(e.to_string())),
            Err(_elapsed) if captured.is_empty() => return Err(ProbeError::TimedOut(self.timeout)),
            Err(_elapsed) => {
                debug!(program = %self.program, ?args, bytes = captured.len(), "probe timed out, keeping partial output");
            }
        }

        Ok(String::from_utf8_lossy(&captured).into_owned())
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
