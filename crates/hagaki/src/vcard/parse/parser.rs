//! vCard document parser.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, parse_content_line, split_lines, unfold};
use super::values::{split_component, unescape_text};
use crate::vcard::core::{VCard, VCardProperty, VCardValue, VCardVersion, names};

/// Parses a vCard document into one or more vCards.
///
/// Malformed individual properties are dropped with a warning appended to
/// `warnings`; the document fails only on structural errors (a card not
/// closed with END:VCARD, an unsupported VERSION).
///
/// ## Errors
/// Returns a parse error if the document structure is malformed.
#[tracing::instrument(skip(input, warnings), fields(input_len = input.len()))]
pub fn parse(input: &str, warnings: &mut Vec<String>) -> ParseResult<Vec<VCard>> {
    tracing::debug!("Parsing vCard document");

    let unfolded = unfold(input);
    let lines = split_lines(&unfolded);

    tracing::trace!(count = lines.len(), "Split lines");

    let mut parser = Parser::new(lines);
    let result = parser.parse_document(warnings)?;

    tracing::debug!(
        count = result.len(),
        warnings = warnings.len(),
        "Parsed vCards"
    );

    Ok(result)
}

/// Parses a single vCard from input.
///
/// ## Errors
/// Returns an error if the document contains no vCards or is malformed.
#[tracing::instrument(skip(input, warnings), fields(input_len = input.len()))]
pub fn parse_single(input: &str, warnings: &mut Vec<String>) -> ParseResult<VCard> {
    let cards = parse(input, warnings)?;
    cards.into_iter().next().ok_or_else(|| {
        tracing::warn!("No vCard found in document");
        ParseError::unexpected_eof(1, "no vCard found in document")
    })
}

struct Parser {
    lines: Vec<String>,
    pos: usize,
}

impl Parser {
    fn new(lines: Vec<String>) -> Self {
        Self { lines, pos: 0 }
    }

    fn current_line(&self) -> usize {
        self.pos + 1
    }

    fn parse_document(&mut self, warnings: &mut Vec<String>) -> ParseResult<Vec<VCard>> {
        let mut cards = Vec::new();

        while self.pos < self.lines.len() {
            let line = &self.lines[self.pos];

            if line.eq_ignore_ascii_case("BEGIN:VCARD") {
                self.pos += 1;
                cards.push(self.parse_vcard(warnings)?);
            } else {
                // Unknown content at top level is skipped
                self.pos += 1;
            }
        }

        Ok(cards)
    }

    fn parse_vcard(&mut self, warnings: &mut Vec<String>) -> ParseResult<VCard> {
        let mut version = VCardVersion::default();
        let mut properties = Vec::new();
        let start_line = self.current_line();

        while self.pos < self.lines.len() {
            let line = &self.lines[self.pos];
            let line_num = self.current_line();
            self.pos += 1;

            if line.eq_ignore_ascii_case("END:VCARD") {
                return Ok(VCard {
                    version,
                    properties,
                });
            }

            // A malformed line costs one property, not the document
            let content_line = match parse_content_line(line, line_num) {
                Ok(content_line) => content_line,
                Err(err) => {
                    warnings.push(format!("property dropped: {err}"));
                    continue;
                }
            };

            if content_line.name == names::VERSION {
                version = VCardVersion::from_str(&content_line.value).ok_or_else(|| {
                    ParseError::new(
                        ParseErrorKind::UnsupportedVersion,
                        line_num,
                        format!("unsupported vCard version: {}", content_line.value),
                    )
                })?;
            } else {
                properties.push(to_property(content_line));
            }
        }

        Err(ParseError::unexpected_eof(
            start_line,
            "vCard not closed with END:VCARD",
        ))
    }
}

/// Converts a lexed content line into a property, interpreting the value by
/// property name and VALUE parameter.
fn to_property(line: ContentLine) -> VCardProperty {
    let value = parse_property_value(&line);

    VCardProperty {
        group: line.group,
        name: line.name,
        params: line.params,
        value,
        raw_value: line.value,
    }
}

fn parse_property_value(line: &ContentLine) -> VCardValue {
    // An explicit VALUE parameter wins over name-based dispatch
    if let Some(value_type) = line.params.get("VALUE") {
        return match value_type.to_ascii_lowercase().as_str() {
            "text" => VCardValue::Text(unescape_text(&line.value)),
            "uri" | "url" => VCardValue::Uri(line.value.clone()),
            _ => VCardValue::Unknown(line.value.clone()),
        };
    }

    match line.name.as_str() {
        names::LOGO | names::PHOTO | names::SOUND | names::KEY | names::URL | "SOURCE"
        | "MEMBER" | "IMPP" | "FBURL" | "CALURI" | "CALADRURI" => {
            VCardValue::Uri(line.value.clone())
        }
        names::NICKNAME | names::CATEGORIES => VCardValue::TextList(split_component(&line.value)),
        _ => VCardValue::Text(unescape_text(&line.value)),
    }
}
