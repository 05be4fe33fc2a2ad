// src/report.rs
use std::io::Write;

use log::{info, trace};

use crate::cli::Cli;
use crate::error::ScriptError;

pub fn run_report<W: Write>(cli: &Cli, out: &mut W) -> Result<(), ScriptError> {
  info!("Writing report...");

  writeln!(out, "Hello World")?;
  writeln!(out, "a_int equals: {}", cli.a_int)?;
  writeln!(out, "a_str equals: {}", cli.a_str)?;
  out.flush()?;

  trace!("Report written.");
  Ok(())
}
