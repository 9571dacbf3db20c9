//! Error types for the flashcard fetch-and-parse pipeline.
//!
//! None of these ever reach the user: the screen turns every error into an
//! empty card list. They exist so that the swallow happens in one visible place.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Connection refused, DNS failure, timeout or a non-2xx status.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The payload is not a JSON object with a `data` array.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("failed to spawn fetch worker: {0}")]
    Worker(#[from] std::io::Error),

    #[error("fetch worker exited without a result")]
    WorkerGone,

    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    #[error("invalid configuration: {message}")]
    ConfigValidation { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}
