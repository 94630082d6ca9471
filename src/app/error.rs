use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid position {offset} in a document of {len} bytes")]
    InvalidPosition { offset: usize, len: usize },
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
