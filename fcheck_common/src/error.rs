use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Memory error: {0}")]
    Memory(String),
}

pub type Result<T> = std::result::Result<T, CompareError>;
