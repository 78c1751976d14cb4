//! Generic vCard property type.

use super::parameter::{ParameterSet, params};

/// A vCard property value.
///
/// The retained value kinds; everything the generic codec does not
/// interpret flows through as `Text`, `Uri`, or `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VCardValue {
    /// Text value.
    Text(String),

    /// Multi-valued text (comma-separated in source).
    TextList(Vec<String>),

    /// URI value, including `data:` URIs.
    Uri(String),

    /// Inline binary data (base64 in source).
    Binary(Vec<u8>),

    /// Unknown/extension value (preserved as text).
    Unknown(String),
}

impl VCardValue {
    /// Returns the value as text if applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Unknown(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a URI if applicable.
    #[must_use]
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Self::Uri(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as binary data if applicable.
    #[must_use]
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(d) => Some(d),
            _ => None,
        }
    }
}

impl From<String> for VCardValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for VCardValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A vCard property.
///
/// Contains the parsed value along with the original raw value for
/// round-trip fidelity. This is the uniform shape every property flows
/// through the codec as; typed views (e.g.
/// [`BinaryProperty`](super::BinaryProperty)) are built on top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: ParameterSet,
    /// Parsed value.
    pub value: VCardValue,
    /// Original raw value string (for round-trip).
    pub raw_value: String,
}

impl VCardProperty {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value_str = value.into();
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: ParameterSet::new(),
            value: VCardValue::Text(value_str.clone()),
            raw_value: value_str,
        }
    }

    /// Creates a property with a text value and group.
    #[must_use]
    pub fn grouped_text(
        group: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut prop = Self::text(name, value);
        prop.group = Some(group.into());
        prop
    }

    /// Creates a property with a URI value.
    #[must_use]
    pub fn uri(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value_str = value.into();
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: ParameterSet::new(),
            value: VCardValue::Uri(value_str.clone()),
            raw_value: value_str,
        }
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Returns whether this property has the specified TYPE value
    /// (case-insensitive).
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.params
            .get_all(params::TYPE)
            .iter()
            .any(|v| v.eq_ignore_ascii_case(type_value))
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Adds a TYPE parameter value.
    pub fn add_type(&mut self, type_value: impl Into<String>) {
        self.params.add(params::TYPE, type_value);
    }
}

/// Common property names as constants.
pub mod names {
    pub const BEGIN: &str = "BEGIN";
    pub const CATEGORIES: &str = "CATEGORIES";
    pub const EMAIL: &str = "EMAIL";
    pub const END: &str = "END";
    pub const FN: &str = "FN";
    pub const KEY: &str = "KEY";
    pub const LOGO: &str = "LOGO";
    pub const NICKNAME: &str = "NICKNAME";
    pub const NOTE: &str = "NOTE";
    pub const PHOTO: &str = "PHOTO";
    pub const SOUND: &str = "SOUND";
    pub const TEL: &str = "TEL";
    pub const UID: &str = "UID";
    pub const URL: &str = "URL";
    pub const VERSION: &str = "VERSION";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_text() {
        let prop = VCardProperty::text("fn", "John Doe");
        assert_eq!(prop.name, "FN");
        assert_eq!(prop.as_text(), Some("John Doe"));
    }

    #[test]
    fn property_grouped() {
        let prop = VCardProperty::grouped_text("item1", "TEL", "+1-555-555-5555");
        assert_eq!(prop.group, Some("item1".to_string()));
        assert_eq!(prop.name, "TEL");
    }

    #[test]
    fn property_with_types() {
        let mut prop = VCardProperty::text("TEL", "+1-555-555-5555");
        prop.add_type("home");
        prop.add_type("voice");

        assert!(prop.has_type("home"));
        assert!(prop.has_type("VOICE"));
        assert!(!prop.has_type("fax"));
    }

    #[test]
    fn uri_value_accessor() {
        let prop = VCardProperty::uri("LOGO", "http://example.com/logo.png");
        assert_eq!(prop.value.as_uri(), Some("http://example.com/logo.png"));
        assert_eq!(prop.as_text(), None);
    }
}
