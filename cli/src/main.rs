mod commands;
mod exit;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, cidrange, getn, inrange, step};
use iptools_common::config::Config;
use terminal::logging;
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let cfg: Config = commands.config();
    if !cfg.color {
        colored::control::set_override(false);
    }

    match run(commands.command, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(exit::code(&err))
        }
    }
}

fn run(command: Commands, cfg: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Inrange { ip, ranges } => inrange::inrange(&ip, &ranges.join(" "), cfg),
        Commands::Cidrange { cidr } => cidrange::cidrange(&cidr, cfg),
        Commands::Next { ip } => step::next(&ip, cfg),
        Commands::Prev { ip } => step::prev(&ip, cfg),
        Commands::Getn {
            cidr,
            count,
            offset,
            tail,
        } => getn::getn(&cidr, count, offset, tail, cfg),
    }
}
