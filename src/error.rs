//! Error types for the parameter extraction run.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a run, short of a panic.
///
/// Parameters that are simply absent from the source document are *not*
/// errors; they are skipped silently by the driver.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A required `key=value` token was not supplied on the command line.
    #[error("missing {key}=<path> on the command line ({what})")]
    MissingArgument {
        key: &'static str,
        what: &'static str,
    },

    /// A consecutive family in the parameter list is never closed by a bound
    /// entry (stop value or continuation marker) before the list ends.
    #[error(
        "consecutive family member `{parameter}` has no bound or continuation \
         entry before the end of the parameter list"
    )]
    UnterminatedFamily { parameter: String },

    /// An input document could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output document could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
