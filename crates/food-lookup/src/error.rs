use thiserror::Error;

/// Errors that can occur when looking up a food.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request could not be completed or the response could not be parsed.
    /// Carries the underlying error text.
    #[error("Lookup transport error: {0}")]
    Transport(String),

    /// The search succeeded but returned no products.
    #[error("No matching product found")]
    NotFound,
}

impl LookupError {
    /// Returns the underlying error detail for transport failures.
    pub fn details(&self) -> Option<&str> {
        match self {
            LookupError::Transport(details) => Some(details.as_str()),
            LookupError::NotFound => None,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Transport(err.to_string())
    }
}

/// Result type for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
