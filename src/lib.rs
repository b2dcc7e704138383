pub mod app;
pub mod cli;
pub mod fingerprint;
pub mod form;
pub mod matcher;
pub mod report;
pub mod settings;
pub mod token_file;

use std::io;

use anyhow::Result;
use cli::{Cli, Commands};
use settings::settings_from_arg;

pub fn run(cli: Cli) -> Result<()> {
    let settings = settings_from_arg(cli.settings.as_deref())?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    match cli.command {
        Commands::Hash(args) => app::hash(&args, &settings, &mut input, &mut output),
        Commands::Save(args) => app::save(&args, &settings, &mut input, &mut output).map(|_| ()),
        Commands::Check(args) => {
            app::check(&args, &settings, &mut input, &mut output).map(|_| ())
        }
    }
}
