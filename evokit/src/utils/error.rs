#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};

/// Specifies a category of the failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// An unknown entity was requested: node, address, shipment, etc.
    NotFound,
    /// Input arguments cannot be used to perform the requested operation.
    Validation,
    /// External data has unexpected shape.
    Parse,
    /// Any other failure.
    Other,
}

/// A basic error type which, essentially, a wrapper on String type with error category.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GenericError {
    kind: ErrorKind,
    message: String,
}

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Creates a new instance of `GenericError`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Creates an error of `ErrorKind::NotFound` category.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Creates an error of `ErrorKind::Validation` category.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Creates an error of `ErrorKind::Parse` category.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    /// Returns error category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns error message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Joins many errors with separator
    pub fn join_many(errs: &[GenericError], separator: &str) -> String {
        errs.iter().map(|err| err.message.as_str()).collect::<Vec<_>>().join(separator)
    }
}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self::new(ErrorKind::Other, msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self::new(ErrorKind::Other, value)
    }
}

impl From<Box<dyn std::error::Error>> for GenericError {
    fn from(value: Box<dyn std::error::Error>) -> Self {
        Self::new(ErrorKind::Other, value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        let kind = match value.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::InvalidData => ErrorKind::Parse,
            _ => ErrorKind::Other,
        };

        Self::new(kind, value.to_string())
    }
}
