use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for strops
#[derive(Error, Debug)]
pub enum Error {
    #[error("substring not found: {0:?}")]
    SubstringNotFound(String),

    #[error("empty separator")]
    EmptySeparator,

    #[error("range step must not be zero")]
    ZeroStep,

    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn not_found(needle: impl Into<String>) -> Self {
        Self::SubstringNotFound(needle.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for the hard not-found raised by `index`/`rindex`
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::SubstringNotFound(_))
    }
}
