//! Binary property unmarshaling.
//!
//! Versions carry binary content differently: 2.1 and 3.0 inline base64
//! flagged by an ENCODING parameter, 4.0 embeds a `data:` URI. Anything
//! that is not inline content is a remote URL.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::error::DecodeError;
use crate::vcard::core::{BinaryProperty, ImageType, VCardProperty, VCardVersion};

/// Splits a `data:<media-type>;base64,<payload>` URI.
///
/// The match is anchored on the `data:` prefix; the media type runs up to
/// the `;base64,` separator.
#[must_use]
pub(crate) fn parse_data_uri(s: &str) -> Option<(&str, &str)> {
    let rest = s.strip_prefix("data:")?;
    rest.split_once(";base64,")
}

/// Decodes base64, tolerating interior whitespace left by folding.
pub(crate) fn decode_base64(payload: &str) -> Result<Vec<u8>, DecodeError> {
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}

fn is_base64_encoding(value: &str) -> bool {
    value.eq_ignore_ascii_case("b") || value.eq_ignore_ascii_case("base64")
}

/// Unmarshals a parsed property into a [`BinaryProperty`] for the given
/// version.
///
/// The property's parameters are carried over; the content type is
/// reconstructed from the TYPE parameter (legacy), the MEDIATYPE parameter,
/// or the data URI's media type (4.0), resolving through the well-known
/// registry with ad-hoc fallback.
///
/// ## Errors
/// Returns [`DecodeError`] when inline content is not valid base64.
pub fn unmarshal_binary(
    prop: &VCardProperty,
    version: VCardVersion,
    warnings: &mut Vec<String>,
) -> Result<BinaryProperty, DecodeError> {
    let mut bin = BinaryProperty::new(prop.name.clone());
    bin.set_params(prop.params.clone());
    let raw = prop.raw_value.as_str();

    if version.is_legacy() {
        let content_type = prop.params.type_value().map(ImageType::resolve_label);

        match prop.params.encoding() {
            Some(enc) if is_base64_encoding(enc) => {
                bin.set_data(decode_base64(raw)?, content_type);
            }
            Some(enc) => {
                warnings.push(format!(
                    "{}: unsupported ENCODING value \"{enc}\", treating value as a URL",
                    prop.name
                ));
                bin.set_url(raw, content_type);
            }
            None => bin.set_url(raw, content_type),
        }
    } else if let Some((media_type, payload)) = parse_data_uri(raw) {
        let content_type = ImageType::resolve_media_type(media_type);
        bin.set_data(decode_base64(payload)?, Some(content_type));
    } else {
        let content_type = prop.params.media_type().map(ImageType::resolve_media_type);
        bin.set_url(raw, content_type);
    }

    Ok(bin)
}
