use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use pingsweep_common::error::ProbeError;
use pingsweep_core::probe::ProbeMechanism;

/// How the fake answers a probe.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// Windows-style reply carrying `TTL=`.
    Alive,
    /// Output without any liveness marker.
    Silent,
    /// The mechanism itself fails.
    Unavailable,
}

/// Scripted stand-in for the system `ping`. Sleeps a random few
/// milliseconds so completions arrive out of dispatch order.
pub struct FakePing {
    reply: Box<dyn Fn(&str) -> Reply + Send + Sync>,
    calls: AtomicUsize,
    invocations: Mutex<Vec<Vec<String>>>,
}

impl FakePing {
    pub fn new<F>(reply: F) -> Self
    where
        F: Fn(&str) -> Reply + Send + Sync + 'static,
    {
        Self {
            reply: Box::new(reply),
            calls: AtomicUsize::new(0),
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: Reply) -> Self {
        Self::new(move |_| reply)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProbeMechanism for FakePing {
    async fn run(&self, args: &[String]) -> Result<String, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.invocations.lock().unwrap().push(args.to_vec());

        tokio::time::sleep(Duration::from_millis(rand::random_range(0..8))).await;

        let target: &str = &args[0];
        match (self.reply)(target) {
            Reply::Alive => Ok(format!(
                "Pinging {target} with 32 bytes of data:\r\nReply from {target}: bytes=32 time=1ms TTL=57\r\n"
            )),
            Reply::Silent => Ok(format!(
                "PING {target}: 56 data bytes\n\n--- {target} ping statistics ---\n4 packets transmitted, 0 packets received, 100.0% packet loss\n"
            )),
            Reply::Unavailable => Err(ProbeError::Unavailable(format!("no route to {target}"))),
        }
    }
}
