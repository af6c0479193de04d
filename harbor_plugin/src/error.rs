//! Error types shared between the host and reporter backends

use thiserror::Error;

/// Result type alias for plugin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for reporter backend operations
#[derive(Error, Debug)]
pub enum Error {
    /// An interactive progress bar was requested but none of the render
    /// contexts supplied by the host matched the backend's progress type.
    /// This is a configuration error and is not retried.
    #[error("{backend} is configured, but there is no progress bar available")]
    MissingProgressContext {
        /// Name of the backend that failed to find its context
        backend: &'static str,
    },

    /// Host context could not be loaded
    #[error("failed to load host context: {0}")]
    Config(String),

    /// Writing to an output sink failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Reading a response from the user failed
    #[error("failed to read prompt input: {0}")]
    Prompt(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_context_message_names_the_backend() {
        let err = Error::MissingProgressContext { backend: "indicatif" };
        assert_eq!(
            err.to_string(),
            "indicatif is configured, but there is no progress bar available"
        );
    }
}
