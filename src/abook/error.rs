use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbookError {
    #[error("Invalid phone number: {0:?} (expected exactly 10 digits)")]
    InvalidPhone(String),

    #[error("Invalid birthday: {0:?} (expected YYYY-MM-DD)")]
    InvalidBirthday(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Address book not found: {}", .0.display())]
    BookNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AbookError {
    /// True for the errors raised when a value fails field validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AbookError::InvalidPhone(_)
                | AbookError::InvalidBirthday(_)
                | AbookError::InvalidConfig(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AbookError::PhoneNotFound(_)
                | AbookError::ContactNotFound(_)
                | AbookError::BookNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AbookError>;
