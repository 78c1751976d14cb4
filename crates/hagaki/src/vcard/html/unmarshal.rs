//! HTML to binary-property unmarshaling.

use super::element::{MarkupElement, collect_elements};
use super::error::MarkupResult;
use crate::error::Skip;
use crate::vcard::core::{BinaryProperty, ImageType, VCardProperty, VCardVersion, names};
use crate::vcard::parse::binary::{decode_base64, parse_data_uri};

/// Unmarshals a logo from a markup element.
///
/// An `img` element (tag matched case-insensitively) is read through its
/// `src` attribute: a `data:` URI decodes into inline bytes with the URI's
/// media type as content type; anything else is stored as a remote URL with
/// the content type left unset. Other elements fall back to the generic
/// text-content unmarshal.
///
/// ## Errors
/// Returns [`Skip`] when the element does not encode a usable logo (no
/// `src`, undecodable data URI, or no usable content); the caller should
/// omit this element and continue with its siblings.
pub fn unmarshal_logo(
    element: &MarkupElement,
    warnings: &mut Vec<String>,
) -> Result<BinaryProperty, Skip> {
    if !element.tag().eq_ignore_ascii_case("img") {
        return unmarshal_text_content(element, warnings);
    }

    let src = element.attr("src").unwrap_or_default();
    if src.is_empty() {
        return Err(Skip::new("<img> element has no src attribute"));
    }

    let mut logo = BinaryProperty::new(names::LOGO);

    if let Some((media_type, payload)) = parse_data_uri(src) {
        let data = decode_base64(payload)
            .map_err(|err| Skip::new(format!("unusable data URI in <img> src: {err}")))?;
        let content_type = ImageType::resolve_media_type(media_type);
        logo.set_data(data, Some(content_type));
    } else {
        // Remote image; no content type is inferred from the URL
        logo.set_url(src, None);
    }

    Ok(logo)
}

/// Generic markup fallback: the element's text content, unmarshaled as a
/// 4.0 wire value.
fn unmarshal_text_content(
    element: &MarkupElement,
    warnings: &mut Vec<String>,
) -> Result<BinaryProperty, Skip> {
    let value = element.text().trim();
    if value.is_empty() {
        return Err(Skip::new(format!(
            "<{}> element has no usable content",
            element.tag()
        )));
    }

    let prop = VCardProperty::uri(names::LOGO, value);
    crate::vcard::parse::unmarshal_binary(&prop, VCardVersion::V4, warnings)
        .map_err(|err| Skip::new(format!("unusable <{}> content: {err}", element.tag())))
}

/// Extracts every usable logo from the `img` elements of a fragment.
///
/// Elements that cannot be unmarshaled are skipped with a warning;
/// processing always continues with the remaining siblings.
///
/// ## Errors
/// Returns an error only when the fragment itself is malformed.
#[tracing::instrument(skip(fragment, warnings), fields(fragment_len = fragment.len()))]
pub fn scan_logos(
    fragment: &str,
    warnings: &mut Vec<String>,
) -> MarkupResult<Vec<BinaryProperty>> {
    let elements = collect_elements(fragment, "img")?;
    tracing::debug!(count = elements.len(), "Scanning img elements");

    let mut logos = Vec::new();
    for element in &elements {
        match unmarshal_logo(element, warnings) {
            Ok(logo) => logos.push(logo),
            Err(skip) => warnings.push(format!("logo element skipped: {skip}")),
        }
    }

    Ok(logos)
}
