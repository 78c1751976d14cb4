//! vCard parse error types.

use std::fmt;

use thiserror::Error;

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred during vCard parsing.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based).
    pub line: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates an unexpected-end-of-input error.
    #[must_use]
    pub fn unexpected_eof(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::UnexpectedEof, line, message)
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidValue, line, message)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Unexpected end of input.
    UnexpectedEof,
    /// Invalid property value.
    InvalidValue,
    /// Invalid property name.
    InvalidPropertyName,
    /// Invalid parameter.
    InvalidParameter,
    /// Unsupported vCard version.
    UnsupportedVersion,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::InvalidValue => write!(f, "invalid value"),
            Self::InvalidPropertyName => write!(f, "invalid property name"),
            Self::InvalidParameter => write!(f, "invalid parameter"),
            Self::UnsupportedVersion => write!(f, "unsupported version"),
        }
    }
}

/// A binary payload that could not be decoded.
///
/// Surfaced by the binary-property codec; never silently swallowed, though
/// document-level parsing converts it into a warning and drops the single
/// affected property.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}
