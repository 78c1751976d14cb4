//! Binary property marshaling.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::Skip;
use crate::vcard::core::{
    BinaryProperty, BinarySource, VCardProperty, VCardValue, VCardVersion, params,
};

/// Media type written for inline content whose format is unknown.
pub(crate) const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Marshals a binary property into a generic property for the given
/// version.
///
/// Remote content serializes as a raw URL; legacy versions tag it with
/// `TYPE=<label>`, 4.0 with `MEDIATYPE=<media type>`. Inline content
/// serializes as base64 with `ENCODING=BASE64` (2.1) or `ENCODING=b` (3.0),
/// or as a `data:` URI with no content-type parameter (4.0).
///
/// ## Errors
/// Returns [`Skip`] when the property has neither a URL nor data; the
/// caller omits the property instead of writing an empty line.
pub fn marshal_binary(
    prop: &BinaryProperty,
    version: VCardVersion,
) -> Result<VCardProperty, Skip> {
    let Some(source) = prop.source() else {
        return Err(Skip::new(format!(
            "{} property has neither a URL nor binary data",
            prop.name()
        )));
    };

    // Start from the property's own parameters, dropping the codec-managed
    // ones so stale values from a previous unmarshal cannot leak through.
    let mut parameters = prop.params().clone();
    parameters.remove(params::ENCODING);
    parameters.remove(params::TYPE);
    parameters.remove(params::MEDIATYPE);

    let value = match (source, version) {
        (BinarySource::Url(url), _) => {
            match prop.content_type() {
                Some(content_type) if version.is_legacy() => {
                    parameters.set_type(content_type.label());
                }
                Some(content_type) => {
                    parameters.set_media_type(content_type.media_type());
                }
                None => {}
            }
            VCardValue::Uri(url.clone())
        }
        (BinarySource::Data(data), VCardVersion::V2_1 | VCardVersion::V3) => {
            let encoding = if version == VCardVersion::V2_1 {
                "BASE64"
            } else {
                "b"
            };
            parameters.set_encoding(encoding);
            if let Some(content_type) = prop.content_type() {
                parameters.set_type(content_type.label());
            }
            VCardValue::Binary(data.clone())
        }
        (BinarySource::Data(data), VCardVersion::V4) => {
            let media_type = prop
                .content_type()
                .map_or(FALLBACK_MEDIA_TYPE, |t| t.media_type());
            let payload = STANDARD.encode(data);
            VCardValue::Uri(format!("data:{media_type};base64,{payload}"))
        }
    };

    let raw_value = match &value {
        VCardValue::Binary(data) => STANDARD.encode(data),
        VCardValue::Uri(uri) => uri.clone(),
        _ => String::new(),
    };

    Ok(VCardProperty {
        group: None,
        name: prop.name().to_string(),
        params: parameters,
        value,
        raw_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcard::core::{ImageType, names};

    #[test]
    fn url_legacy_emits_type() {
        let logo =
            BinaryProperty::with_url(names::LOGO, "http://x.com/a.png", Some(ImageType::PNG));
        let prop = marshal_binary(&logo, VCardVersion::V3).unwrap();

        assert_eq!(prop.value.as_uri(), Some("http://x.com/a.png"));
        assert_eq!(prop.params.type_value(), Some("png"));
        assert_eq!(prop.params.media_type(), None);
        assert_eq!(prop.params.encoding(), None);
    }

    #[test]
    fn url_v4_emits_mediatype() {
        let logo =
            BinaryProperty::with_url(names::LOGO, "http://x.com/a.png", Some(ImageType::PNG));
        let prop = marshal_binary(&logo, VCardVersion::V4).unwrap();

        assert_eq!(prop.params.media_type(), Some("image/png"));
        assert_eq!(prop.params.type_value(), None);
    }

    #[test]
    fn url_without_content_type_has_no_params() {
        let logo = BinaryProperty::with_url(names::LOGO, "http://x.com/a.png", None);
        let prop = marshal_binary(&logo, VCardVersion::V4).unwrap();

        assert!(prop.params.is_empty());
    }

    #[test]
    fn data_v21_uses_base64_keyword() {
        let logo = BinaryProperty::with_data(names::LOGO, vec![0x41], Some(ImageType::GIF));
        let prop = marshal_binary(&logo, VCardVersion::V2_1).unwrap();

        assert_eq!(prop.params.encoding(), Some("BASE64"));
        assert_eq!(prop.params.type_value(), Some("gif"));
        assert_eq!(prop.raw_value, "QQ==");
    }

    #[test]
    fn data_v3_uses_b_keyword() {
        let logo = BinaryProperty::with_data(names::LOGO, vec![0x41], Some(ImageType::GIF));
        let prop = marshal_binary(&logo, VCardVersion::V3).unwrap();

        assert_eq!(prop.params.encoding(), Some("b"));
    }

    #[test]
    fn data_v4_builds_data_uri() {
        let logo = BinaryProperty::with_data(names::LOGO, vec![0x41], Some(ImageType::PNG));
        let prop = marshal_binary(&logo, VCardVersion::V4).unwrap();

        assert_eq!(prop.value.as_uri(), Some("data:image/png;base64,QQ=="));
        assert_eq!(prop.params.type_value(), None);
        assert_eq!(prop.params.media_type(), None);
    }

    #[test]
    fn data_v4_without_content_type_uses_octet_stream() {
        let logo = BinaryProperty::with_data(names::LOGO, vec![0x41], None);
        let prop = marshal_binary(&logo, VCardVersion::V4).unwrap();

        assert_eq!(
            prop.value.as_uri(),
            Some("data:application/octet-stream;base64,QQ==")
        );
    }

    #[test]
    fn empty_property_is_skipped() {
        let logo = BinaryProperty::new(names::LOGO);
        let err = marshal_binary(&logo, VCardVersion::V4).unwrap_err();
        assert!(err.reason().contains("LOGO"));
    }

    #[test]
    fn language_parameter_survives() {
        let mut logo =
            BinaryProperty::with_url(names::LOGO, "http://x.com/a.png", Some(ImageType::PNG));
        logo.set_language("en");

        let prop = marshal_binary(&logo, VCardVersion::V4).unwrap();
        assert_eq!(prop.params.language(), Some("en"));
    }

    #[test]
    fn stale_codec_params_do_not_leak() {
        let mut logo = BinaryProperty::with_url(names::LOGO, "http://x.com/a.png", None);
        logo.params_mut().set_encoding("b");
        logo.params_mut().set_type("gif");

        let prop = marshal_binary(&logo, VCardVersion::V4).unwrap();
        assert_eq!(prop.params.encoding(), None);
        assert_eq!(prop.params.type_value(), None);
    }
}
