use pingsweep_common::config::Config;
use pingsweep_common::error::SweepError;
use pingsweep_common::network::target::{self, Target, TargetSpec};
use pingsweep_common::probe::outcome::ProbeOutcome;
use pingsweep_common::probe::platform::Platform;
use tracing::debug;

/// Lifecycle of a whole sweep. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SweepState {
    CollectingTargets,
    Dispatched,
    Draining,
    Finished,
}

/// Everything one sweep owns: settings, targets and the alive outcomes.
///
/// Single-use: once swept it stays [`SweepState::Finished`].
#[derive(Debug)]
pub struct SweepSession {
    platform: Platform,
    count: u32,
    targets: Vec<Target>,
    alive: Vec<ProbeOutcome>,
    state: SweepState,
}

impl SweepSession {
    pub fn new(platform: Platform, count: u32) -> Self {
        Self {
            platform,
            count,
            targets: Vec::new(),
            alive: Vec::new(),
            state: SweepState::CollectingTargets,
        }
    }

    /// Derives the targets for `spec` using the dialect, count and cap from `cfg`.
    pub fn from_spec(spec: &TargetSpec, cfg: &Config) -> Result<Self, SweepError> {
        let mut session = Self::new(cfg.platform, cfg.count);
        session.targets = target::to_targets(spec, cfg.max_targets)?;
        Ok(session)
    }

    /// Builds a session from raw user input. Malformed input derives no targets at all.
    pub fn from_inputs(range: Option<&str>, target: Option<&str>, cfg: &Config) -> Result<Self, SweepError> {
        let spec = TargetSpec::from_inputs(range, target)?;
        Self::from_spec(&spec, cfg)
    }

    #[cfg(test)]
    pub(crate) fn add_target(&mut self, target: Target) {
        debug_assert_eq!(self.state, SweepState::CollectingTargets);
        self.targets.push(target);
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Outcomes that carried a liveness signal, in target order.
    pub fn alive(&self) -> &[ProbeOutcome] {
        &self.alive
    }

    pub fn state(&self) -> SweepState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SweepState::Finished
    }

    pub(crate) fn advance(&mut self, next: SweepState) {
        debug_assert!(next > self.state, "{:?} -> {:?}", self.state, next);
        debug!(from = ?self.state, to = ?next, "sweep state changed");
        self.state = next;
    }

    /// Stores collected outcomes, keyed by their index in [`Self::targets`].
    pub(crate) fn record_alive(&mut self, mut collected: Vec<(usize, ProbeOutcome)>) {
        collected.sort_by_key(|(index, _)| *index);
        self.alive = collected.into_iter().map(|(_, outcome)| outcome).collect();
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_spec_uses_config() {
        let cfg = Config {
            count: 2,
            platform: Platform::Windows,
            ..Config::default()
        };
        let spec = TargetSpec::block("10.0.0.0/31").unwrap();
        let session = SweepSession::from_spec(&spec, &cfg).unwrap();

        assert_eq!(session.count(), 2);
        assert_eq!(session.platform(), Platform::Windows);
        assert_eq!(session.targets().len(), 2);
        assert_eq!(session.state(), SweepState::CollectingTargets);
        assert!(session.alive().is_empty());
    }

    #[test]
    fn test_record_alive_restores_target_order() {
        let mut session = SweepSession::new(Platform::Posix, 1);
        for token in ["10.0.0.1", "10.0.0.2", "10.0.0.3"] {
            session.add_target(Target::classify(token));
        }

        let outcome = |token: &str| {
            ProbeOutcome::from_output(Target::classify(token), "TTL=1".to_string())
        };
        session.record_alive(vec![(2, outcome("10.0.0.3")), (0, outcome("10.0.0.1"))]);

        let order: Vec<&str> = session.alive().iter().map(|o| o.target().raw()).collect();
        assert_eq!(order, vec!["10.0.0.1", "10.0.0.3"]);
    }
}
