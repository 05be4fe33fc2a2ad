// src/main.rs
mod cli;
mod error;
mod report;

use std::env;
use std::io;

use error::ScriptError;
use log::LevelFilter;

fn main() -> Result<(), ScriptError> {
  // clap prints help/version to stdout (exit 0) and usage errors to stderr (exit 2)
  let cli = match cli::parse_args(env::args_os()) {
    Ok(cli) => cli,
    Err(ScriptError::ArgumentParse(e)) => e.exit(),
    Err(e) => return Err(e),
  };

  // Setup logging based on verbosity; logs go to stderr, never stdout
  let log_level = match cli.verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(log_level).init();

  log::debug!("CLI args: {:?}", cli);

  let stdout = io::stdout();
  report::run_report(&cli, &mut stdout.lock())?;

  Ok(())
}
