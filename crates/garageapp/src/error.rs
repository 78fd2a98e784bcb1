use thiserror::Error;

#[derive(Error, Debug)]
pub enum GarageError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid stock data in sheet row {row}: {reason}")]
    DataIntegrity { row: usize, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Input closed before a value was entered")]
    InputClosed,
}

impl GarageError {
    /// True for failures that come from talking to the backing store, as
    /// opposed to local terminal I/O.
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            GarageError::Store(_)
                | GarageError::DataIntegrity { .. }
                | GarageError::Http(_)
                | GarageError::Serialization(_)
        )
    }
}

impl From<confique::Error> for GarageError {
    fn from(err: confique::Error) -> Self {
        GarageError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GarageError>;
