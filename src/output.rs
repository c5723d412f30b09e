//! Writing the generated source to its destination.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Writes `content` in one go, to `destination` when given or to stdout.
/// An existing destination file is truncated.
///
/// # Errors
/// * `Error::OutputWriteError` if the destination cannot be created or written
pub fn write_output<P: AsRef<Path>>(content: &str, destination: Option<P>) -> Result<()> {
    match destination {
        Some(path) => {
            let path = path.as_ref();
            debug!("Writing {} bytes to {}", content.len(), path.display());
            let write_err =
                |source| Error::OutputWriteError { path: path.display().to_string(), source };
            let mut file = File::create(path).map_err(write_err)?;
            file.write_all(content.as_bytes()).map_err(write_err)?;
            file.flush().map_err(write_err)
        }
        None => {
            let write_err =
                |source| Error::OutputWriteError { path: "<stdout>".to_string(), source };
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes()).map_err(write_err)?;
            stdout.flush().map_err(write_err)
        }
    }
}
