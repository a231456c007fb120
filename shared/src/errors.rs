use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Malformed event: {0}")]
    MalformedEvent(String),
}

impl From<serde_json::Error> for SignupError {
    fn from(err: serde_json::Error) -> Self {
        SignupError::Serialization(err.to_string())
    }
}

pub type SignupResult<T> = Result<T, SignupError>;
