use thiserror::Error;

/// Outcome of a failed field rule. Returned to the form, never raised.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field")]
    RequiredField,

    #[error("Invalid value")]
    InvalidField,
}

/// Failures raised by the remote use cases.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("This email is already in use")]
    EmailInUse,

    #[error("Something wrong occurred. Please try again later.")]
    Unexpected,
}
