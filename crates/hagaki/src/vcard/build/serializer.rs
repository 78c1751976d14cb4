//! vCard serialization.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use crate::vcard::core::{Parameter, VCard, VCardProperty, VCardValue};

/// Serializes one or more vCards to a string.
///
/// Produces output with CRLF line endings, value escaping, and 75-octet
/// line folding. Properties are written in the order they appear on the
/// card.
#[must_use]
pub fn serialize(cards: &[VCard]) -> String {
    let mut output = String::new();

    for card in cards {
        serialize_vcard(card, &mut output);
    }

    output
}

/// Serializes a single vCard to a string.
#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    let mut output = String::new();
    serialize_vcard(card, &mut output);
    output
}

fn serialize_vcard(card: &VCard, output: &mut String) {
    output.push_str("BEGIN:VCARD\r\n");

    // VERSION must be first after BEGIN
    output.push_str("VERSION:");
    output.push_str(card.version.as_str());
    output.push_str("\r\n");

    for prop in &card.properties {
        serialize_property(prop, output);
    }

    output.push_str("END:VCARD\r\n");
}

fn serialize_property(prop: &VCardProperty, output: &mut String) {
    let mut line = String::new();

    if let Some(ref group) = prop.group {
        line.push_str(group);
        line.push('.');
    }

    line.push_str(&prop.name);

    for param in prop.params.entries() {
        serialize_parameter(param, &mut line);
    }

    line.push(':');
    serialize_value(&prop.value, &mut line);

    output.push_str(&fold_line(&line));
    output.push_str("\r\n");
}

fn serialize_parameter(param: &Parameter, output: &mut String) {
    output.push(';');
    output.push_str(&param.name);
    output.push('=');

    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }

        let (escaped, needs_quotes) = escape_param_value(value);

        if needs_quotes {
            output.push('"');
            output.push_str(&escaped);
            output.push('"');
        } else {
            output.push_str(&escaped);
        }
    }
}

fn serialize_value(value: &VCardValue, output: &mut String) {
    match value {
        VCardValue::Text(s) => output.push_str(&escape_text(s)),
        VCardValue::TextList(list) => {
            for (i, s) in list.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                output.push_str(&escape_text(s));
            }
        }
        // URIs are written verbatim
        VCardValue::Uri(s) | VCardValue::Unknown(s) => output.push_str(s),
        VCardValue::Binary(data) => output.push_str(&STANDARD.encode(data)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcard::core::{VCardVersion, names};

    #[test]
    fn serialize_simple_vcard() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::text("FN", "John Doe"));

        let output = serialize_single(&card);

        assert!(output.starts_with("BEGIN:VCARD\r\n"));
        assert!(output.contains("VERSION:4.0\r\n"));
        assert!(output.contains("FN:John Doe\r\n"));
        assert!(output.ends_with("END:VCARD\r\n"));
    }

    #[test]
    fn serialize_v21_vcard() {
        let card = VCard::with_version(VCardVersion::V2_1);
        let output = serialize_single(&card);
        assert!(output.contains("VERSION:2.1\r\n"));
    }

    #[test]
    fn serialize_with_group() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::grouped_text("item1", "TEL", "+1-555-555-5555"));

        let output = serialize_single(&card);
        assert!(output.contains("item1.TEL:+1-555-555-5555\r\n"));
    }

    #[test]
    fn serialize_with_parameters() {
        let mut card = VCard::new();
        let mut prop = VCardProperty::text("TEL", "+1-555-555-5555");
        prop.add_type("home");
        prop.add_type("voice");
        card.add_property(prop);

        let output = serialize_single(&card);
        assert!(output.contains("TEL;TYPE=home;TYPE=voice:+1-555-555-5555\r\n"));
    }

    #[test]
    fn serialize_escapes_text() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::text(
            "NOTE",
            "Line1\nLine2; with special, chars",
        ));

        let output = serialize_single(&card);
        assert!(output.contains("NOTE:Line1\\nLine2\\; with special\\, chars\r\n"));
    }

    #[test]
    fn serialize_quotes_params_with_delimiters() {
        let mut card = VCard::new();
        let mut prop = VCardProperty::uri("LOGO", "http://x.com/a.png");
        prop.params.set("X-NOTE", "a:b;c");
        card.add_property(prop);

        let output = serialize_single(&card);
        assert!(output.contains("LOGO;X-NOTE=\"a:b;c\":http://x.com/a.png\r\n"));
    }

    #[test]
    fn serialize_binary_as_base64() {
        let mut card = VCard::with_version(VCardVersion::V3);
        let mut prop = VCardProperty {
            group: None,
            name: names::LOGO.to_string(),
            params: crate::vcard::core::ParameterSet::new(),
            value: VCardValue::Binary(vec![0x41, 0x42]),
            raw_value: String::new(),
        };
        prop.params.set_encoding("b");
        card.add_property(prop);

        let output = serialize_single(&card);
        assert!(output.contains("LOGO;ENCODING=b:QUI=\r\n"));
    }

    #[test]
    fn serialize_preserves_property_order() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::text("NOTE", "first"));
        card.add_property(VCardProperty::text("FN", "second"));

        let output = serialize_single(&card);
        let note_pos = output.find("NOTE:first").unwrap();
        let fn_pos = output.find("FN:second").unwrap();
        assert!(note_pos < fn_pos);
    }

    #[test]
    fn serialize_folds_long_lines() {
        let mut card = VCard::new();
        card.add_property(VCardProperty::text("NOTE", "X".repeat(100)));

        let output = serialize_single(&card);
        assert!(output.contains("\r\n "));
    }

    #[test]
    fn serialize_multiple_vcards() {
        let cards = vec![VCard::new(), VCard::with_version(VCardVersion::V3)];
        let output = serialize(&cards);

        assert_eq!(output.matches("BEGIN:VCARD").count(), 2);
        assert_eq!(output.matches("END:VCARD").count(), 2);
    }
}
