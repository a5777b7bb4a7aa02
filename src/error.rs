#[derive(Debug, thiserror::Error)]
pub enum AuctionError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl AuctionError {
    /// True for network failures and non-success HTTP statuses.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }

    /// True when the response body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, AuctionError>;
