//! vCard container type.

use super::binary::BinaryProperty;
use super::property::{VCardProperty, names};
use crate::error::Skip;
use crate::vcard::{build, parse};

/// vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VCardVersion {
    /// vCard 2.1.
    V2_1,
    /// vCard 3.0 (RFC 2426).
    V3,
    /// vCard 4.0 (RFC 6350).
    #[default]
    V4,
}

impl VCardVersion {
    /// Parses from version string.
    #[must_use]
    #[expect(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "2.1" => Some(Self::V2_1),
            "3.0" => Some(Self::V3),
            "4.0" => Some(Self::V4),
            _ => None,
        }
    }

    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2_1 => "2.1",
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }

    /// Returns whether this is a pre-4.0 version.
    ///
    /// Legacy versions carry binary content as bare base64 with an
    /// ENCODING parameter instead of a `data:` URI.
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self, Self::V2_1 | Self::V3)
    }
}

impl core::str::FromStr for VCardVersion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VCardVersion::from_str(s).ok_or(())
    }
}

/// A complete vCard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCard {
    /// vCard version.
    pub version: VCardVersion,
    /// All properties in order of appearance.
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    /// Creates a new vCard 4.0.
    #[must_use]
    pub fn new() -> Self {
        Self::with_version(VCardVersion::V4)
    }

    /// Creates a vCard with the specified version.
    #[must_use]
    pub fn with_version(version: VCardVersion) -> Self {
        Self {
            version,
            properties: Vec::new(),
        }
    }

    /// Adds a property to the vCard.
    pub fn add_property(&mut self, prop: VCardProperty) {
        self.properties.push(prop);
    }

    /// Marshals a binary property for this card's version and adds it.
    ///
    /// ## Errors
    /// Returns [`Skip`] when the property has neither a URL nor data.
    pub fn add_binary(&mut self, prop: &BinaryProperty) -> Result<(), Skip> {
        let marshaled = build::binary::marshal_binary(prop, self.version)?;
        self.add_property(marshaled);
        Ok(())
    }

    /// Returns all properties with the given name.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&VCardProperty> {
        let name_upper = name.to_ascii_uppercase();
        self.properties
            .iter()
            .filter(|p| p.name == name_upper)
            .collect()
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&VCardProperty> {
        let name_upper = name.to_ascii_uppercase();
        self.properties.iter().find(|p| p.name == name_upper)
    }

    /// Returns the FN (formatted name) value.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.get_property(names::FN)?.as_text()
    }

    /// Returns the UID value.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_property(names::UID)?.as_text()
    }

    /// Returns all EMAIL property values.
    #[must_use]
    pub fn emails(&self) -> Vec<&str> {
        self.get_properties(names::EMAIL)
            .iter()
            .filter_map(|p| p.as_text())
            .collect()
    }

    /// Unmarshals every property with the given name as a binary property.
    ///
    /// Properties that cannot be decoded are dropped and a warning is
    /// appended; the remaining properties are returned in document order.
    pub fn binary_properties(
        &self,
        name: &str,
        warnings: &mut Vec<String>,
    ) -> Vec<BinaryProperty> {
        self.get_properties(name)
            .into_iter()
            .filter_map(
                |p| match parse::binary::unmarshal_binary(p, self.version, warnings) {
                    Ok(bin) => Some(bin),
                    Err(err) => {
                        warnings.push(format!("{name} property dropped: {err}"));
                        None
                    }
                },
            )
            .collect()
    }

    /// Returns all LOGO properties in typed form.
    pub fn logos(&self, warnings: &mut Vec<String>) -> Vec<BinaryProperty> {
        self.binary_properties(names::LOGO, warnings)
    }
}

impl Default for VCard {
    fn default() -> Self {
        Self::new()
    }
}
