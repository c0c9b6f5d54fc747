use std::sync::Arc;

use colored::*;
use tracing::{error, warn};

use crate::commands::CommandLine;
use crate::{mprint, terminal::{colors, format, print, spinner}};
use pingsweep_common::{config::Config, error::SweepError, success};
use pingsweep_core::probe::system::SystemPing;
use pingsweep_core::session::SweepSession;
use pingsweep_core::shutdown;
use pingsweep_core::sweep::{SweepCoordinator, SweepSummary};

pub async fn sweep(range: Option<&str>, target: Option<&str>, cfg: &Config) -> anyhow::Result<()> {
    let mut session = match SweepSession::from_inputs(range, target, cfg) {
        Ok(session) => session,
        Err(e) => return target_error(e),
    };

    let (stop, token) = shutdown::shutdown_channel();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, waiting for in-flight probes...");
            stop.shutdown();
        }
    });

    let mut coordinator = SweepCoordinator::new(
        Arc::new(SystemPing::from_config(cfg)),
        cfg.concurrency,
        token,
    );
    if !cfg.quiet {
        spinner::start(session.targets().len());
        coordinator = coordinator.with_progress(spinner::report_progress);
    }

    let summary: SweepSummary = coordinator.run(&mut session).await;

    ctrl_c.abort();
    spinner::finish();

    sweep_ends(&session, &summary, cfg);
    Ok(())
}

fn target_error(e: SweepError) -> anyhow::Result<()> {
    error!("{e}");
    match e {
        SweepError::InvalidRange { .. } | SweepError::NoTargets => CommandLine::print_usage(),
        SweepError::RangeTooLarge { .. } => Ok(()),
    }
}

fn sweep_ends(session: &SweepSession, summary: &SweepSummary, cfg: &Config) {
    if cfg.quiet {
        for outcome in session.alive() {
            mprint!(&format::report_line(outcome));
        }
        return;
    }

    if session.alive().is_empty() {
        print::header("zero targets responded", cfg.quiet);
        print::no_results();
    } else {
        print::header("Ping Sweep", cfg.quiet);
        print_outcomes(session);
    }
    print_summary(summary);
}

fn print_outcomes(session: &SweepSession) {
    let alive = session.alive();
    for (idx, outcome) in alive.iter().enumerate() {
        print::tree_head(idx, outcome.target().raw());
        print::as_tree_one_level(format::outcome_to_details(outcome));
        if idx + 1 != alive.len() {
            mprint!();
        }
    }
}

fn print_summary(summary: &SweepSummary) {
    let alive: ColoredString = format!("{} alive", summary.alive).bold().green();
    let probed: ColoredString = format!("{}/{} probed", summary.joined, summary.dispatched).bold();
    let total_time: ColoredString = format!("{:.2}s", summary.elapsed.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Sweep Complete: {alive} of {probed} in {total_time}").color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());

    if summary.cancelled {
        warn!("Sweep was interrupted, results are partial");
    }
    if summary.panicked > 0 {
        error!("{} probe workers failed", summary.panicked);
    } else {
        success!("All {} probes accounted for", summary.joined);
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
