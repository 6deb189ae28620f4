use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElevatorError {
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Deadlock: simulation made no progress after {steps} steps")]
    Deadlock { steps: u64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ElevatorError>;
