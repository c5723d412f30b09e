//! Error handling for codefs.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while generating an embedded file system.
///
/// Every variant is fatal: the run is aborted and no partial output is written.
#[derive(Error, Debug)]
pub enum Error {
    /// The root directory, the template or a file inside the tree could not be read
    #[error("Failed to read '{path}': {source}.")]
    FileSystemError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A discovered path cannot be turned into a server path
    #[error("Invalid path: {0}.")]
    InvalidPathError(String),

    /// An exclusion glob failed to compile
    #[error("Ignore pattern error: {0}.")]
    IgnorePatternError(String),

    /// The template does not carry the expected markers
    #[error("Malformed template: {0}.")]
    MalformedTemplateError(String),

    /// The destination could not be created or written
    #[error("Failed to write '{path}': {source}.")]
    OutputWriteError {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wraps an I/O failure on `path` into a [`Error::FileSystemError`].
    pub fn file_system<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Error::FileSystemError { path: path.as_ref().display().to_string(), source }
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.display().to_string()).unwrap_or_default();
        // Loop errors surface as `ErrorKind::Other` carrying walkdir's message.
        Error::FileSystemError { path, source: io::Error::from(err) }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
