//! Error types for my-mastermind

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MastermindError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, MastermindError>;
