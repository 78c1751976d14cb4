//! Image content-type tags for binary properties.

use std::borrow::Cow;

/// An image content type attached to a binary property.
///
/// Carries the legacy TYPE-parameter label, the media type used by the 4.0
/// MEDIATYPE parameter and data URIs, and an optional file extension.
///
/// A fixed set of well-known instances ([`ImageType::GIF`],
/// [`ImageType::JPEG`], [`ImageType::PNG`]) coexists with ad-hoc instances
/// built from unrecognized input; equality is field-wise, so an ad-hoc
/// instance that spells out a well-known type compares equal to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageType {
    label: Cow<'static, str>,
    media_type: Cow<'static, str>,
    extension: Option<Cow<'static, str>>,
}

/// The well-known image types.
static WELL_KNOWN: [ImageType; 3] = [ImageType::GIF, ImageType::JPEG, ImageType::PNG];

impl ImageType {
    pub const GIF: Self = Self::well_known("gif", "image/gif", "gif");
    pub const JPEG: Self = Self::well_known("jpeg", "image/jpeg", "jpg");
    pub const PNG: Self = Self::well_known("png", "image/png", "png");

    const fn well_known(
        label: &'static str,
        media_type: &'static str,
        extension: &'static str,
    ) -> Self {
        Self {
            label: Cow::Borrowed(label),
            media_type: Cow::Borrowed(media_type),
            extension: Some(Cow::Borrowed(extension)),
        }
    }

    /// Creates an ad-hoc image type.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        media_type: impl Into<String>,
        extension: Option<String>,
    ) -> Self {
        Self {
            label: Cow::Owned(label.into()),
            media_type: Cow::Owned(media_type.into()),
            extension: extension.map(Cow::Owned),
        }
    }

    /// Looks up a well-known type by its TYPE-parameter label.
    ///
    /// Matching is ASCII case-insensitive; returns `None` when the label is
    /// not in the well-known set.
    #[must_use]
    pub fn from_label(label: &str) -> Option<&'static ImageType> {
        WELL_KNOWN.iter().find(|t| t.label.eq_ignore_ascii_case(label))
    }

    /// Looks up a well-known type by its media type.
    #[must_use]
    pub fn from_media_type(media_type: &str) -> Option<&'static ImageType> {
        WELL_KNOWN
            .iter()
            .find(|t| t.media_type.eq_ignore_ascii_case(media_type))
    }

    /// Resolves a TYPE-parameter label to an image type.
    ///
    /// Registry hit when the label is well known, otherwise an ad-hoc
    /// instance with `media_type` of `image/<label>` and no extension.
    /// Never fails.
    #[must_use]
    pub fn resolve_label(label: &str) -> ImageType {
        Self::from_label(label)
            .cloned()
            .unwrap_or_else(|| Self::new(label, format!("image/{label}"), None))
    }

    /// Resolves a media-type string to an image type.
    ///
    /// Registry hit when the media type is well known, otherwise an ad-hoc
    /// instance whose label is the text after the first `/`, or empty when
    /// there is no `/` or nothing follows it. Never fails.
    #[must_use]
    pub fn resolve_media_type(media_type: &str) -> ImageType {
        if let Some(known) = Self::from_media_type(media_type) {
            return known.clone();
        }

        let label = match media_type.find('/') {
            Some(pos) if pos + 1 < media_type.len() => &media_type[pos + 1..],
            _ => "",
        };

        Self::new(label, media_type, None)
    }

    /// Returns the TYPE-parameter label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the media type.
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Returns the file extension, if known.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}
