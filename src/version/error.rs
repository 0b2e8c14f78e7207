use thiserror::Error;

/// Reasons a version check can fail.
///
/// Everything the pipeline can hit folds into one of these; a check never
/// surfaces a panic or an unhandled error to its caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckError {
    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    Parse(String),

    #[error("check endpoint misconfigured: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CheckError::Parse(err.to_string())
        } else {
            CheckError::Network(err.to_string())
        }
    }
}
