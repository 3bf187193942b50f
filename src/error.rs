use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{0}")]
    Usage(String),
    #[error("could not create shader compiler: {0}")]
    CompilerInit(String),
    #[error("could not read {}: {source}", .path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to compile {}:\n{diagnostics}", .path.display())]
    Compilation { path: PathBuf, diagnostics: String },
    #[error("could not write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DriverError {
    /// The input or output file this error is about, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            DriverError::Usage(_) | DriverError::CompilerInit(_) => None,
            DriverError::InputAccess { path, .. }
            | DriverError::Compilation { path, .. }
            | DriverError::OutputWrite { path, .. } => Some(path),
        }
    }
}
