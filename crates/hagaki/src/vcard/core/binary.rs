//! Binary-attachment property type.

use super::media::ImageType;
use super::parameter::ParameterSet;

/// Where a binary property's content lives.
///
/// A property references its content remotely or carries it inline, never
/// both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinarySource {
    /// Remote reference.
    Url(String),
    /// Inline payload.
    Data(Vec<u8>),
}

/// A property whose value is binary content (LOGO, PHOTO, SOUND, KEY).
///
/// Storage is either a remote URL or an inline byte payload; setting one
/// replaces the other. The content type is independent metadata describing
/// the payload format regardless of which storage mode is active.
///
/// ```rust
/// use hagaki::vcard::core::{BinaryProperty, ImageType, names};
///
/// let mut logo = BinaryProperty::with_url(
///     names::LOGO,
///     "http://example.com/logo.png",
///     Some(ImageType::PNG),
/// );
/// assert!(logo.data().is_none());
///
/// logo.set_data(vec![0x89, 0x50], Some(ImageType::PNG));
/// assert!(logo.url().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryProperty {
    name: String,
    source: Option<BinarySource>,
    content_type: Option<ImageType>,
    params: ParameterSet,
}

impl BinaryProperty {
    /// Creates an empty property; neither URL nor data is set until one of
    /// the setters is called.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            source: None,
            content_type: None,
            params: ParameterSet::new(),
        }
    }

    /// Creates a property referencing remote content.
    #[must_use]
    pub fn with_url(
        name: impl Into<String>,
        url: impl Into<String>,
        content_type: Option<ImageType>,
    ) -> Self {
        let mut prop = Self::new(name);
        prop.set_url(url, content_type);
        prop
    }

    /// Creates a property carrying inline content.
    #[must_use]
    pub fn with_data(
        name: impl Into<String>,
        data: Vec<u8>,
        content_type: Option<ImageType>,
    ) -> Self {
        let mut prop = Self::new(name);
        prop.set_data(data, content_type);
        prop
    }

    /// Returns the property name (e.g. "LOGO").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the remote URL, if this property references remote content.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match &self.source {
            Some(BinarySource::Url(url)) => Some(url),
            _ => None,
        }
    }

    /// Returns the inline payload, if this property carries one.
    #[must_use]
    pub fn data(&self) -> Option<&[u8]> {
        match &self.source {
            Some(BinarySource::Data(data)) => Some(data),
            _ => None,
        }
    }

    /// Returns the storage mode, if any content has been set.
    #[must_use]
    pub fn source(&self) -> Option<&BinarySource> {
        self.source.as_ref()
    }

    /// Returns the content type describing the payload format.
    #[must_use]
    pub fn content_type(&self) -> Option<&ImageType> {
        self.content_type.as_ref()
    }

    /// Points the property at remote content, clearing any inline payload.
    pub fn set_url(&mut self, url: impl Into<String>, content_type: Option<ImageType>) {
        self.source = Some(BinarySource::Url(url.into()));
        self.content_type = content_type;
    }

    /// Stores an inline payload, clearing any remote URL.
    pub fn set_data(&mut self, data: Vec<u8>, content_type: Option<ImageType>) {
        self.source = Some(BinarySource::Data(data));
        self.content_type = content_type;
    }

    /// Returns the parameters attached to this property.
    #[must_use]
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Returns the parameters for mutation.
    pub fn params_mut(&mut self) -> &mut ParameterSet {
        &mut self.params
    }

    /// Replaces the whole parameter set (used by the codec).
    pub(crate) fn set_params(&mut self, params: ParameterSet) {
        self.params = params;
    }

    /// Returns the language tag this property is written in.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.params.language()
    }

    /// Sets the language tag.
    pub fn set_language(&mut self, tag: impl Into<String>) {
        self.params.set_language(tag);
    }

    /// Returns the image type named by the TYPE parameter, resolved through
    /// the well-known registry with ad-hoc fallback.
    #[must_use]
    pub fn image_type(&self) -> Option<ImageType> {
        self.params.type_value().map(ImageType::resolve_label)
    }

    /// Sets the TYPE parameter from an image type's label.
    pub fn set_image_type(&mut self, image_type: &ImageType) {
        self.params.set_type(image_type.label());
    }
}
