//! Application-level error types
//!
//! Widget operations never fail: invalid input coerces to 0, out-of-range
//! indices and pops on empty structures are no-ops. The errors here only cover
//! the terminal host and its logging setup.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Terminal setup, drawing, or event polling failed
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// The log file could not be created
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A global tracing subscriber was already installed, or the filter was invalid
    #[error("logging setup failed: {0}")]
    Logging(String),
}
