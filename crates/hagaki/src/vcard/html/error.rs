//! Markup parse error types.

use std::fmt;

/// Result type for markup parsing.
pub type MarkupResult<T> = Result<T, MarkupError>;

/// An error that occurred while reading an HTML fragment.
#[derive(Debug)]
pub struct MarkupError {
    /// Error kind.
    pub kind: MarkupErrorKind,
    /// Error message.
    pub message: String,
}

impl MarkupError {
    /// Creates a new markup error.
    #[must_use]
    pub fn new(kind: MarkupErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates an XML error.
    #[must_use]
    pub fn xml(message: impl Into<String>) -> Self {
        Self::new(MarkupErrorKind::XmlError, message)
    }

    /// Creates a missing element error.
    #[must_use]
    pub fn missing_element() -> Self {
        Self::new(MarkupErrorKind::MissingElement, "fragment has no element")
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for MarkupError {}

impl From<quick_xml::Error> for MarkupError {
    fn from(err: quick_xml::Error) -> Self {
        Self::xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for MarkupError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::xml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for MarkupError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::new(MarkupErrorKind::EncodingError, err.to_string())
    }
}

impl From<quick_xml::encoding::EncodingError> for MarkupError {
    fn from(err: quick_xml::encoding::EncodingError) -> Self {
        Self::new(MarkupErrorKind::EncodingError, err.to_string())
    }
}

/// Markup error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupErrorKind {
    /// Malformed markup.
    XmlError,
    /// The fragment contains no element.
    MissingElement,
    /// Encoding error.
    EncodingError,
}

impl fmt::Display for MarkupErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XmlError => write!(f, "markup error"),
            Self::MissingElement => write!(f, "missing element"),
            Self::EncodingError => write!(f, "encoding error"),
        }
    }
}
