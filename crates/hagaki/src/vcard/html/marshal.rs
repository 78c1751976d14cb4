//! Binary-property to HTML marshaling.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use quick_xml::escape::escape;

use crate::error::Skip;
use crate::vcard::build::binary::FALLBACK_MEDIA_TYPE;
use crate::vcard::core::{BinaryProperty, BinarySource};

/// Marshals a binary property as an `<img>` element.
///
/// Remote content becomes the `src` URL; inline content becomes a `data:`
/// URI.
///
/// ## Errors
/// Returns [`Skip`] when the property has neither a URL nor data.
pub fn marshal_logo(prop: &BinaryProperty) -> Result<String, Skip> {
    let src = match prop.source() {
        Some(BinarySource::Url(url)) => url.clone(),
        Some(BinarySource::Data(data)) => {
            let media_type = prop
                .content_type()
                .map_or(FALLBACK_MEDIA_TYPE, |t| t.media_type());
            format!("data:{media_type};base64,{}", STANDARD.encode(data))
        }
        None => {
            return Err(Skip::new(format!(
                "{} property has neither a URL nor binary data",
                prop.name()
            )));
        }
    };

    Ok(format!("<img src=\"{}\" />", escape(&src)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcard::core::{ImageType, names};

    #[test]
    fn url_becomes_src() {
        let logo = BinaryProperty::with_url(names::LOGO, "http://x.com/a.png", None);
        assert_eq!(
            marshal_logo(&logo).unwrap(),
            "<img src=\"http://x.com/a.png\" />"
        );
    }

    #[test]
    fn data_becomes_data_uri() {
        let logo = BinaryProperty::with_data(names::LOGO, vec![0x41], Some(ImageType::PNG));
        assert_eq!(
            marshal_logo(&logo).unwrap(),
            "<img src=\"data:image/png;base64,QQ==\" />"
        );
    }

    #[test]
    fn src_is_attribute_escaped() {
        let logo = BinaryProperty::with_url(names::LOGO, "http://x.com/a?b=1&c=2", None);
        let html = marshal_logo(&logo).unwrap();
        assert!(html.contains("b=1&amp;c=2"));
    }

    #[test]
    fn empty_property_is_skipped() {
        let logo = BinaryProperty::new(names::LOGO);
        assert!(marshal_logo(&logo).is_err());
    }
}
