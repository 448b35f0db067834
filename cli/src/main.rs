mod commands;
mod terminal;

use std::io;

use commands::session::Session;
use commands::{CommandLine, build_clinic};
use menagerie_common::config::Config;
use menagerie_core::zoo::Zoo;
use terminal::prompt::Prompt;
use terminal::{logging, print};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    if commands.no_color {
        colored::control::set_override(false);
    }
    logging::init_logging()?;

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };
    print::banner(&cfg);

    let prompt = Prompt::new(io::stdin().lock(), io::stdout()).shared();
    let zoo = Zoo::new(build_clinic(commands.clinic, &prompt));

    let mut session = Session::new(zoo, prompt);
    session.run(&cfg)?;

    debug!(
        animals = session.zoo().animal_count(),
        things = session.zoo().things().len(),
        "session closed"
    );
    Ok(())
}
