use clap::Parser;

use starfield::cli::CliArgs;
use starfield::config::Config;
use starfield::logging::init_logging;
use starfield::{StarfieldError, terminal};

fn main() -> Result<(), StarfieldError> {
    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);
    config.validate()?;

    init_logging(args.log_file.as_deref(), &config.debug.log_level)?;

    terminal::run(&config)
}
