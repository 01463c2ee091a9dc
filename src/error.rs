use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Randomness source failed: {0}")]
    Randomness(#[from] rand::Error),

    #[error("Evolution cancelled at generation {generation}")]
    Cancelled { generation: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PasswordError>;
