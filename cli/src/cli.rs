// src/cli.rs
use std::ffi::OsString;

use clap::Parser;
use num_bigint::BigInt;

use crate::error::ScriptError;

#[derive(Parser, Debug)]
#[command(
    name = "ds-script", // Command name users type
    author,
    version,
    about = "A starting-point script for data-science projects.",
    long_about = None,
    args_override_self = true, // Repeated flags: last one wins
    infer_long_args = true     // Unambiguous prefixes like --a_i
)]
pub struct Cli {
  /// Integer value to echo back
  #[arg(
    long = "a_int",
    default_value_t = BigInt::from(1),
    value_parser = parse_int,
    allow_negative_numbers = true
  )]
  pub a_int: BigInt,

  /// Text value to echo back
  #[arg(long = "a_str", default_value = "hello")]
  pub a_str: String,

  /// Increase verbosity level (e.g., -v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,
}

/// Reads decimal integer text of any size. Surrounding whitespace is ignored and
/// single underscores may group digits (`1_000`).
fn parse_int(raw: &str) -> Result<BigInt, String> {
  let trimmed = raw.trim();
  let digits = trimmed
    .strip_prefix(&['+', '-'][..])
    .unwrap_or(trimmed);

  let well_formed = !digits.is_empty()
    && digits.chars().all(|c| c.is_ascii_digit() || c == '_')
    && !digits.starts_with('_')
    && !digits.ends_with('_')
    && !digits.contains("__");
  if !well_formed {
    return Err(format!("'{}' is not a valid integer", raw));
  }

  trimmed
    .replace('_', "")
    .parse::<BigInt>()
    .map_err(|e| e.to_string())
}

/// Parses an argument list whose first element is the program name.
/// Help and version requests also come back as `ScriptError::ArgumentParse`;
/// the wrapped clap error knows where to print itself and which code to exit with.
pub fn parse_args<I, T>(args: I) -> Result<Cli, ScriptError>
where
  I: IntoIterator<Item = T>,
  T: Into<OsString> + Clone,
{
  Ok(Cli::try_parse_from(args)?)
}
