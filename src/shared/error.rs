// src/shared/error.rs

/// Coarse classification shared by every use-case error.
/// The web layer picks the HTTP status from the kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ValidationFailure,
    Unexpected,
}

pub trait ClassifiedError: std::error::Error {
    fn kind(&self) -> ErrorKind;

    /// Stable, machine-readable code sent to clients.
    fn code(&self) -> &'static str;
}
