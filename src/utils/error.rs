use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkdockError {
    #[error("validation failed for '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("payload does not match any known model")]
    UnrecognizedPayload,

    #[error("authentication rejected by server (HTTP {status})")]
    AuthenticationError { status: u16 },

    #[error("resource not found: {endpoint}")]
    NotFound { endpoint: String },

    #[error("protocol error: {message}")]
    ProtocolError { message: String },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<reqwest::Error> for LinkdockError {
    fn from(err: reqwest::Error) -> Self {
        LinkdockError::ProtocolError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LinkdockError {
    fn from(err: serde_json::Error) -> Self {
        LinkdockError::ProtocolError {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LinkdockError>;
