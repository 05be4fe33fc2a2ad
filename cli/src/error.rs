// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
  /// Malformed invocation, or a help/version request clap answers itself.
  #[error("Argument parse error: {0}")]
  ArgumentParse(#[from] clap::Error),

  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),
}
