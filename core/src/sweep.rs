//! Concurrent fan-out of probes and fan-in of their results.
//!
//! Every target gets its own tokio task, but a semaphore caps how many of
//! them probe at once. Alive outcomes travel through a bounded channel to a
//! single collector; silent ones never touch the channel. Completion is
//! decided by joining every task, not by watching the channel, so a worker
//! that found nothing is still accounted for.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use pingsweep_common::probe::outcome::ProbeOutcome;
use pingsweep_common::probe::request::ProbeTask;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, error, info, trace, warn};

use crate::probe::{self, ProbeMechanism};
use crate::session::{SweepSession, SweepState};
use crate::shutdown::ShutdownToken;

/// Per-target lifecycle. Each task passes through it exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeState {
    Pending,
    InFlight,
    CompletedWithSignal,
    CompletedWithoutSignal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepProgress {
    pub completed: usize,
    pub alive: usize,
    pub total: usize,
}

pub type ProgressCallback = Arc<dyn Fn(SweepProgress) + Send + Sync>;

/// Bookkeeping of a finished sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepSummary {
    pub dispatched: usize,
    pub joined: usize,
    pub alive: usize,
    /// Workers that panicked; they count as joined without a signal.
    pub panicked: usize,
    pub cancelled: bool,
    pub elapsed: Duration,
}

pub struct SweepCoordinator {
    mechanism: Arc<dyn ProbeMechanism>,
    concurrency: usize,
    shutdown: ShutdownToken,
    on_progress: Option<ProgressCallback>,
}

struct Worker {
    index: usize,
    total: usize,
    mechanism: Arc<dyn ProbeMechanism>,
    permits: Arc<Semaphore>,
    results: mpsc::Sender<(usize, ProbeOutcome)>,
    shutdown: ShutdownToken,
    completed: Arc<AtomicUsize>,
    alive: Arc<AtomicUsize>,
    on_progress: Option<ProgressCallback>,
}

impl SweepCoordinator {
    /// `concurrency` below one is treated as one.
    pub fn new(
        mechanism: Arc<dyn ProbeMechanism>,
        concurrency: usize,
        shutdown: ShutdownToken,
    ) -> Self {
        Self {
            mechanism,
            concurrency: concurrency.max(1),
            shutdown,
            on_progress: None,
        }
    }

    /// Called from worker tasks after every completed probe.
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(SweepProgress) + Send + Sync + 'static,
    {
        self.on_progress = Some(Arc::new(callback));
        self
    }

    /// Probes every target of `session` and stores the alive outcomes in it.
    ///
    /// Returns once all workers are joined and the channel is drained; the
    /// session is then [`SweepState::Finished`]. A session is swept once; a
    /// second call dispatches nothing and leaves its results untouched.
    pub async fn run(&self, session: &mut SweepSession) -> SweepSummary {
        let start_time: Instant = Instant::now();
        if session.state() != SweepState::CollectingTargets {
            warn!(state = ?session.state(), "session was already swept, nothing dispatched");
            return SweepSummary {
                dispatched: 0,
                joined: 0,
                alive: 0,
                panicked: 0,
                cancelled: self.shutdown.is_shutdown(),
                elapsed: start_time.elapsed(),
            };
        }
        let total: usize = session.targets().len();

        let (tx, rx) = mpsc::channel::<(usize, ProbeOutcome)>(self.concurrency);
        let collector = tokio::spawn(collect(rx));

        let permits = Arc::new(Semaphore::new(self.concurrency));
        let completed = Arc::new(AtomicUsize::new(0));
        let alive = Arc::new(AtomicUsize::new(0));

        let mut workers: JoinSet<ProbeState> = JoinSet::new();
        for (index, target) in session.targets().iter().cloned().enumerate() {
            let task = ProbeTask::build(target, session.platform(), session.count());
            let worker = Worker {
                index,
                total,
                mechanism: self.mechanism.clone(),
                permits: permits.clone(),
                results: tx.clone(),
                shutdown: self.shutdown.clone(),
                completed: completed.clone(),
                alive: alive.clone(),
                on_progress: self.on_progress.clone(),
            };
            workers.spawn(worker.run(task));
        }
        // workers hold the remaining senders; the channel closes with the last of them
        drop(tx);

        let dispatched: usize = workers.len();
        session.advance(SweepState::Dispatched);
        info!(
            dispatched,
            concurrency = self.concurrency,
            platform = %session.platform(),
            "probes dispatched"
        );

        let mut joined: usize = 0;
        let mut panicked: usize = 0;
        while let Some(result) = workers.join_next().await {
            joined += 1;
            match result {
                Ok(state) => trace!(?state, joined, "worker joined"),
                Err(e) => {
                    panicked += 1;
                    error!("probe worker failed: {e}");
                }
            }
        }

        session.advance(SweepState::Draining);
        let collected: Vec<(usize, ProbeOutcome)> = collector.await.unwrap_or_else(|e| {
            error!("result collector failed: {e}");
            Vec::new()
        });
        let alive_count: usize = collected.len();
        session.record_alive(collected);
        session.advance(SweepState::Finished);

        let summary = SweepSummary {
            dispatched,
            joined,
            alive: alive_count,
            panicked,
            cancelled: self.shutdown.is_shutdown(),
            elapsed: start_time.elapsed(),
        };
        debug!(?summary, "sweep finished");
        summary
    }
}

impl Worker {
    async fn run(self, task: ProbeTask) -> ProbeState {
        let Worker {
            index,
            total,
            mechanism,
            permits,
            results,
            mut shutdown,
            completed,
            alive,
            on_progress,
        } = self;
        trace!(target_addr = %task.target(), state = ?ProbeState::Pending);

        let permit = tokio::select! {
            permit = permits.acquire_owned() => permit.ok(),
            _ = shutdown.wait() => None,
        };

        let outcome: Option<ProbeOutcome> = match permit {
            Some(_permit) if !shutdown.is_shutdown() => {
                trace!(target_addr = %task.target(), count = task.count(), state = ?ProbeState::InFlight);
                tokio::select! {
                    outcome = probe::execute(mechanism.as_ref(), task) => Some(outcome),
                    _ = shutdown.wait() => None,
                }
            }
            _ => None,
        };

        let state = match outcome {
            Some(outcome) if outcome.is_alive() => {
                alive.fetch_add(1, Ordering::Relaxed);
                if results.send((index, outcome)).await.is_err() {
                    error!("result collector went away, outcome dropped");
                }
                ProbeState::CompletedWithSignal
            }
            _ => ProbeState::CompletedWithoutSignal,
        };

        let done: usize = completed.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(callback) = on_progress {
            callback(SweepProgress {
                completed: done,
                alive: alive.load(Ordering::Relaxed),
                total,
            });
        }

        state
    }
}

async fn collect(mut rx: mpsc::Receiver<(usize, ProbeOutcome)>) -> Vec<(usize, ProbeOutcome)> {
    let mut collected = Vec::new();
    while let Some(entry) = rx.recv().await {
        collected.push(entry);
    }
    collected
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
