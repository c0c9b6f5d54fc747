use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use pingsweep_core::sweep::SweepProgress;

const TIP: &str = "Press Ctrl-C to stop early";

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

fn init_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn start(total: usize) {
    let pb = SPINNER.get_or_init(init_spinner);
    pb.set_message(format!(
        "Probing {} targets... {}",
        total.to_string().bold(),
        TIP.italic().white()
    ));
}

pub fn report_progress(progress: SweepProgress) {
    if let Some(pb) = SPINNER.get() {
        pb.set_message(format!(
            "Probed {}/{} targets, {} alive so far...",
            progress.completed,
            progress.total,
            progress.alive.to_string().green().bold()
        ));
    }
}

pub fn finish() {
    if let Some(pb) = SPINNER.get() {
        pb.finish_and_clear();
    }
}

/// Log sink that keeps the spinner line intact while events are printed.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut stdout = io::stdout();
        match SPINNER.get() {
            Some(pb) if !pb.is_finished() => pb.suspend(|| stdout.write_all(buf))?,
            _ => stdout.write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
