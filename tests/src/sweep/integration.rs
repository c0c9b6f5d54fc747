use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

use pingsweep_common::config::Config;
use pingsweep_common::error::SweepError;
use pingsweep_common::network::target::TargetSpec;
use pingsweep_common::probe::platform::Platform;
use pingsweep_core::session::{SweepSession, SweepState};
use pingsweep_core::shutdown::shutdown_channel;
use pingsweep_core::sweep::{SweepCoordinator, SweepSummary};

use crate::fake::{FakePing, Reply};

fn config(platform: Platform) -> Config {
    Config {
        platform,
        concurrency: 8,
        ..Config::default()
    }
}

async fn run_sweep(
    spec: &TargetSpec,
    cfg: &Config,
    mechanism: Arc<FakePing>,
) -> anyhow::Result<(SweepSession, SweepSummary)> {
    let mut session = SweepSession::from_spec(spec, cfg)?;
    let (_sender, token) = shutdown_channel();
    let coordinator = SweepCoordinator::new(mechanism, cfg.concurrency, token);
    let summary = coordinator.run(&mut session).await;
    Ok((session, summary))
}

/// Builds the session from raw input the way the binary does; the mechanism
/// only runs once a session exists.
async fn sweep_inputs(
    range: Option<&str>,
    target: Option<&str>,
    cfg: &Config,
    mechanism: Arc<FakePing>,
) -> Result<(SweepSession, SweepSummary), SweepError> {
    let mut session = SweepSession::from_inputs(range, target, cfg)?;
    let (_sender, token) = shutdown_channel();
    let coordinator = SweepCoordinator::new(mechanism, cfg.concurrency, token);
    let summary = coordinator.run(&mut session).await;
    Ok((session, summary))
}

/// A /30 where every address answers yields all four addresses, in order.
#[tokio::test]
async fn sweep_small_block_all_alive() -> anyhow::Result<()> {
    let cfg = config(Platform::Windows);
    let spec = TargetSpec::block("192.168.1.0/30")?;
    let fake = Arc::new(FakePing::always(Reply::Alive));

    let (session, summary) = run_sweep(&spec, &cfg, fake.clone()).await?;

    assert_eq!(session.state(), SweepState::Finished);
    assert_eq!(summary.dispatched, 4);
    assert_eq!(summary.joined, 4);
    assert_eq!(summary.alive, 4);
    assert_eq!(fake.calls(), 4);

    let addresses: Vec<Option<IpAddr>> = session
        .alive()
        .iter()
        .map(|outcome| outcome.target().address())
        .collect();
    let expected: Vec<Option<IpAddr>> = (0..4)
        .map(|d| Some(IpAddr::V4(Ipv4Addr::new(192, 168, 1, d))))
        .collect();
    assert_eq!(addresses, expected);
    assert!(session.alive().iter().all(|o| o.signal() == Some("TTL=57")));

    Ok(())
}

/// The mechanism receives the Windows dialect for address targets.
#[tokio::test]
async fn sweep_passes_dialect_arguments() -> anyhow::Result<()> {
    let cfg = Config {
        count: 2,
        ..config(Platform::Windows)
    };
    let spec = TargetSpec::block("10.1.2.3/32")?;
    let fake = Arc::new(FakePing::always(Reply::Silent));

    run_sweep(&spec, &cfg, fake.clone()).await?;

    assert_eq!(fake.invocations(), vec![vec!["10.1.2.3", "-4", "-n", "2"]]);
    Ok(())
}

/// A hostname without a marker in its output is left out of the report.
#[tokio::test]
async fn sweep_hostname_without_marker() -> anyhow::Result<()> {
    let cfg = config(Platform::Posix);
    let spec = TargetSpec::single("example.test")?;
    let fake = Arc::new(FakePing::always(Reply::Silent));

    let (session, summary) = run_sweep(&spec, &cfg, fake.clone()).await?;

    assert!(session.is_finished());
    assert!(session.alive().is_empty());
    assert_eq!(summary.dispatched, 1);
    assert_eq!(summary.alive, 0);
    assert_eq!(fake.invocations(), vec![vec!["example.test", "-c", "4"]]);
    Ok(())
}

/// Malformed CIDR input never reaches the mechanism and the sweep never starts.
#[tokio::test]
async fn sweep_malformed_range_dispatches_nothing() -> anyhow::Result<()> {
    let cfg = config(Platform::Posix);
    let fake = Arc::new(FakePing::always(Reply::Alive));

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        sweep_inputs(Some("not-a-cidr"), None, &cfg, fake.clone()),
    )
    .await?;

    assert!(matches!(result, Err(SweepError::InvalidRange { .. })));
    assert_eq!(fake.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn sweep_inputs_run_the_same_path_when_valid() -> anyhow::Result<()> {
    let cfg = config(Platform::Posix);
    let fake = Arc::new(FakePing::always(Reply::Alive));

    let (session, summary) = sweep_inputs(Some("10.4.4.0/31"), None, &cfg, fake.clone()).await?;

    assert_eq!(fake.calls(), 2);
    assert_eq!(summary.dispatched, 2);
    assert_eq!(session.alive().len(), 2);
    Ok(())
}

#[tokio::test]
async fn sweep_refuses_oversized_block() {
    let cfg = Config {
        max_targets: 16,
        ..config(Platform::Posix)
    };
    let spec = TargetSpec::block("10.0.0.0/24").unwrap();

    let result = SweepSession::from_spec(&spec, &cfg);
    assert!(matches!(
        result,
        Err(SweepError::RangeTooLarge { size: 256, limit: 16, .. })
    ));
}

/// Only the targets that carried a signal are reported; failures are isolated.
#[tokio::test]
async fn sweep_mixed_replies() -> anyhow::Result<()> {
    let cfg = config(Platform::Posix);
    let spec = TargetSpec::block("172.16.4.0/26")?;
    let fake = Arc::new(FakePing::new(|target: &str| {
        let last: u8 = target.rsplit('.').next().and_then(|o| o.parse().ok()).unwrap_or(0);
        match last % 3 {
            0 => Reply::Alive,
            1 => Reply::Silent,
            _ => Reply::Unavailable,
        }
    }));

    let (session, summary) = run_sweep(&spec, &cfg, fake.clone()).await?;

    let expected_alive: usize = (0u8..64).filter(|d| d % 3 == 0).count();
    assert_eq!(summary.dispatched, 64);
    assert_eq!(summary.joined, 64);
    assert_eq!(summary.alive, expected_alive);
    assert_eq!(session.alive().len(), expected_alive);
    assert_eq!(fake.calls(), 64);

    let raws: Vec<&str> = session.alive().iter().map(|o| o.target().raw()).collect();
    assert_eq!(raws.first(), Some(&"172.16.4.0"));
    assert_eq!(raws.last(), Some(&"172.16.4.63"));
    Ok(())
}

#[tokio::test]
async fn sweep_ipv6_block() -> anyhow::Result<()> {
    let cfg = config(Platform::Posix);
    let spec = TargetSpec::block("fd00::/126")?;
    let fake = Arc::new(FakePing::always(Reply::Alive));

    let (session, summary) = run_sweep(&spec, &cfg, fake.clone()).await?;

    assert_eq!(summary.alive, 4);
    let raws: Vec<&str> = session.alive().iter().map(|o| o.target().raw()).collect();
    assert_eq!(raws, vec!["fd00::", "fd00::1", "fd00::2", "fd00::3"]);
    assert!(fake.invocations().iter().all(|args| args[1] == "-6"));
    Ok(())
}

/// Shutdown lets an in-progress sweep finish with whatever was collected.
#[tokio::test]
async fn sweep_shutdown_finishes_session() -> anyhow::Result<()> {
    let cfg = Config {
        concurrency: 1,
        ..config(Platform::Posix)
    };
    let spec = TargetSpec::block("10.9.0.0/24")?;
    let mut session = SweepSession::from_spec(&spec, &cfg)?;
    let (sender, token) = shutdown_channel();
    let coordinator = SweepCoordinator::new(
        Arc::new(FakePing::always(Reply::Alive)),
        cfg.concurrency,
        token,
    );

    let stopper = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        sender.shutdown();
    });

    let summary = tokio::time::timeout(Duration::from_secs(10), coordinator.run(&mut session)).await?;
    stopper.await?;

    assert!(summary.cancelled);
    assert_eq!(summary.joined, summary.dispatched);
    assert!(summary.alive < 256);
    assert!(session.is_finished());
    Ok(())
}
