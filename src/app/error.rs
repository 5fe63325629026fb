use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Path(#[from] crate::path::PathError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
