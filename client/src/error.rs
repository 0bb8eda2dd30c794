use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("rejected: {0}")]
    Rejected(String),

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("no results found for location: {0}")]
    NoSuchPlace(String),

    #[error("not logged in")]
    NoSession,
}

impl ClientError {
    /// Permanent errors will not succeed on retry; the status poller stops
    /// on these instead of backing off.
    pub fn is_permanent(&self) -> bool {
        matches!(self, ClientError::NotFound(_) | ClientError::Rejected(_))
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
