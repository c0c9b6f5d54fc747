use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;
use crate::terminal::spinner::SpinnerWriter;

const SUCCESS_TARGET: &str = "pingsweep::success";

pub struct SweepFormatter;

impl<S, N> FormatEvent<S, N> for SweepFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
                match (*meta.level(), meta.target()) {
                    (Level::INFO, SUCCESS_TARGET) => ("[+]", |s| s.green().bold()),
                    (Level::TRACE, _) => ("[ ]", |s| s.dimmed()),
                    (Level::DEBUG, _) => ("[?]", |s| s.blue()),
                    (Level::INFO, _) => ("[*]", |s| s.cyan().bold()),
                    (Level::WARN, _) => ("[!]", |s| s.yellow().bold()),
                    _ => ("[-]", |s| s.red().bold()),
                };
            write!(writer, "{} ", color_func(symbol.into()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the level picked from the flags. Report lines are
/// always let through so a strict filter cannot swallow the results.
pub fn init_logging(verbose: bool, quiet: bool) -> anyhow::Result<()> {
    let default_level: &str = match (verbose, quiet) {
        (true, _) => "debug",
        (false, true) => "error",
        (false, false) => "info",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level))
        .add_directive(format!("{PRINT_TARGET}=info").parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(SweepFormatter)
        .with_writer(|| SpinnerWriter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
