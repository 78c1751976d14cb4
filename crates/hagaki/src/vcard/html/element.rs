//! Minimal markup element model.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::error::{MarkupError, MarkupResult};

/// One markup element: tag name, attributes, and flattened text content.
///
/// This is the unit the HTML codec consumes; it deliberately models only
/// what hCard-style extraction needs, not a full DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupElement {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
}

impl MarkupElement {
    /// Creates an element with no attributes or text (mostly for tests).
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: String::new(),
        }
    }

    /// Adds an attribute, returning the element for chaining.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Sets the text content, returning the element for chaining.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Reads the first element of a markup fragment, including its
    /// flattened text content.
    ///
    /// Unclosed elements (HTML void tags like `<img>`) are accepted; the
    /// element simply ends at the end of the fragment.
    ///
    /// ## Errors
    /// Returns an error if the fragment is malformed or holds no element.
    pub fn parse(fragment: &str) -> MarkupResult<Self> {
        let mut reader = Reader::from_reader(fragment.as_bytes());
        reader.config_mut().trim_text(true);
        // HTML void elements (<img>) have no end tag
        reader.config_mut().check_end_names = false;

        let mut buf = Vec::new();
        let mut element: Option<MarkupElement> = None;
        let mut depth = 0usize;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    if element.is_none() {
                        element = Some(from_start(e)?);
                    }
                    depth += 1;
                }
                Ok(Event::Empty(ref e)) => {
                    if element.is_none() {
                        element = Some(from_start(e)?);
                        break;
                    }
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(el) = element.as_mut() {
                        let decoded = reader.decoder().decode(e.as_ref())?;
                        el.text.push_str(&decoded);
                    }
                }
                Ok(Event::End(_)) => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 && element.is_some() {
                        break;
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(MarkupError::xml(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        element.ok_or_else(MarkupError::missing_element)
    }

    /// Returns the tag name as written in the source.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns an attribute value by ASCII case-insensitive name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the flattened text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Collects every element with the given tag name (ASCII case-insensitive)
/// from a fragment, attributes only.
///
/// ## Errors
/// Returns an error if the fragment is malformed.
pub fn collect_elements(fragment: &str, tag: &str) -> MarkupResult<Vec<MarkupElement>> {
    let mut reader = Reader::from_reader(fragment.as_bytes());
    reader.config_mut().trim_text(true);
    reader.config_mut().check_end_names = false;

    let mut buf = Vec::new();
    let mut elements = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e) | Event::Empty(ref e)) => {
                let local_name_bytes = e.local_name();
                let local_name = std::str::from_utf8(local_name_bytes.as_ref())?;
                if local_name.eq_ignore_ascii_case(tag) {
                    elements.push(from_start(e)?);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(MarkupError::xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(elements)
}

fn from_start(e: &BytesStart<'_>) -> MarkupResult<MarkupElement> {
    let local_name_bytes = e.local_name();
    let tag = std::str::from_utf8(local_name_bytes.as_ref())?.to_owned();

    let mut element = MarkupElement::new(tag);
    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?.to_owned();
        let value = std::str::from_utf8(&attr.value)?.to_owned();
        element.attributes.push((key, value));
    }

    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_self_closed_element() {
        let el = MarkupElement::parse("<img src=\"http://x.com/a.png\" />").unwrap();
        assert_eq!(el.tag(), "img");
        assert_eq!(el.attr("src"), Some("http://x.com/a.png"));
        assert_eq!(el.text(), "");
    }

    #[test]
    fn parse_unclosed_void_element() {
        let el = MarkupElement::parse("<img src=\"a.png\">").unwrap();
        assert_eq!(el.tag(), "img");
        assert_eq!(el.attr("src"), Some("a.png"));
    }

    #[test]
    fn parse_element_with_text() {
        let el = MarkupElement::parse("<div>http://x.com/logo.png</div>").unwrap();
        assert_eq!(el.tag(), "div");
        assert_eq!(el.text(), "http://x.com/logo.png");
    }

    #[test]
    fn parse_nested_text_flattens() {
        let el = MarkupElement::parse("<div><span>http://x.com/</span>a.png</div>").unwrap();
        assert_eq!(el.text(), "http://x.com/a.png");
    }

    #[test]
    fn attr_lookup_is_case_insensitive() {
        let el = MarkupElement::parse("<IMG SRC=\"a.png\"/>").unwrap();
        assert_eq!(el.tag(), "IMG");
        assert_eq!(el.attr("src"), Some("a.png"));
    }

    #[test]
    fn parse_empty_fragment_fails() {
        assert!(MarkupElement::parse("").is_err());
        assert!(MarkupElement::parse("   just text   ").is_err());
    }

    #[test]
    fn collect_img_elements() {
        let fragment = "<div><img src=\"a.png\"/><p>x</p><IMG src=\"b.png\"/></div>";
        let imgs = collect_elements(fragment, "img").unwrap();
        assert_eq!(imgs.len(), 2);
        assert_eq!(imgs[0].attr("src"), Some("a.png"));
        assert_eq!(imgs[1].attr("src"), Some("b.png"));
    }
}
