mod commands;
mod terminal;

use commands::{CommandLine, sweep};
use pingsweep_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet)?;

    if !commands.has_targets() {
        return CommandLine::print_usage();
    }

    let cfg: Config = commands.to_config();

    print::banner(cfg.quiet);
    print::header("getting ready for the sweep", cfg.quiet);
    sweep::sweep(commands.range.as_deref(), commands.target.as_deref(), &cfg).await
}
