use resource_namer::NamerError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the resource-namer CLI application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading, parsing or saving configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid or incomplete command-line arguments were provided.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The requested name could not be composed, or the checked name is invalid.
    #[error(transparent)]
    Naming(#[from] NamerError),

    /// The result could not be rendered in the requested output format.
    #[error("Failed to serialize output: {0}")]
    Serialization(String),

    /// Failed to write to the standard output buffer.
    ///
    /// This error occurs when the CLI cannot write output to the terminal,
    /// typically due to broken pipes or terminal issues.
    #[error("Failed to flush the std out buffer.")]
    StdOutFlushFailed,
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Naming failures exit with 1 so scripts can tell a rejected name apart
    /// from a usage or configuration problem, which exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Naming(_) => 1,
            Error::Config(_)
            | Error::InvalidArguments(_)
            | Error::Serialization(_)
            | Error::StdOutFlushFailed => 2,
        }
    }
}
