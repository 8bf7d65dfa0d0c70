//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Password too short")]
    PasswordTooShort,

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
