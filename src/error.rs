use std::io;
use thiserror::Error;

use crate::roster::{GRADE_MAX, GRADE_MIN};

pub type Result<T> = std::result::Result<T, ClassbookError>;

/// Errors raised by the roster, the profile builder and the interactive sessions
#[derive(Error, Debug)]
pub enum ClassbookError {
    /// A student with this name is already on the roster
    #[error("Student with that name already exists")]
    DuplicateName(String),

    /// No student with this name is on the roster
    #[error("Student with that name doesn't exist")]
    NotFound(String),

    /// Input is not a whole number
    #[error("'{0}' is not a valid whole number. Try again.")]
    InvalidNumber(String),

    /// Grade outside the accepted range
    #[error("Grade must be between {} and {}. Try again.", GRADE_MIN, GRADE_MAX)]
    OutOfRange(i64),

    /// Nothing to average
    #[error("No students with grades available.")]
    EmptyAggregate,

    /// Menu option that does not exist
    #[error("Invalid choice. Try again.")]
    InvalidChoice(i64),

    /// Configuration file malformed or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Console or file system failure
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ClassbookError {
    /// Create a new invalid number error
    pub fn invalid_number<S: Into<String>>(input: S) -> Self {
        ClassbookError::InvalidNumber(input.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ClassbookError::Config(msg.into())
    }

    /// Check if the session can report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClassbookError::DuplicateName(_) => true,
            ClassbookError::NotFound(_) => true,
            ClassbookError::InvalidNumber(_) => true,
            ClassbookError::OutOfRange(_) => true,
            ClassbookError::EmptyAggregate => true,
            ClassbookError::InvalidChoice(_) => true,
            ClassbookError::Config(_) => false,
            ClassbookError::Io(_) => false,
        }
    }
}
