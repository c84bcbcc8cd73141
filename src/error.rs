use std::io;

use thiserror::Error;

/// Errors that abort a conversion.
///
/// Recoverable oddities in the event stream (a level style outside of a
/// list-style declaration, a list close with nothing open, a missing outline
/// level) never end up here; they are logged and skipped.
#[derive(Error, Debug)]
pub enum Error {
    /// The content part is not well-formed XML.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The LaTeX destination rejected a write.
    #[error("Failed to write LaTeX output: {0}")]
    Sink(#[source] io::Error),

    /// Reading the input or preparing the output directory failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a readable ODT (ZIP) container.
    #[error("Invalid ODT package: {0}")]
    Package(String),

    /// The archive has no entry with the requested name.
    #[error("Package part not found: {0}")]
    MissingPart(String),

    /// A user-supplied config file could not be parsed.
    #[error("Invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
