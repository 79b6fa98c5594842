//! Error types for timetag operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimetagError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),
}

pub type Result<T> = std::result::Result<T, TimetagError>;
