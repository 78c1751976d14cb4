//! vCard lexer for line unfolding and content line parsing.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::vcard::core::{Parameter, ParameterSet, params};

/// Unfolds a vCard document by removing line continuations.
///
/// A continuation is CRLF (or bare LF, for lenient parsing) followed by a
/// single space or tab; the line break and that one whitespace character
/// are removed, so folding inside a word or a base64 run is lossless.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next();
                } else {
                    result.push('\n');
                }
            }
            '\n' => {
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next();
                } else {
                    result.push('\n');
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Splits unfolded input into non-empty logical lines.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(ToString::to_string)
        .collect()
}

/// A parsed content line before value interpretation.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: ParameterSet,
    /// Raw value string.
    pub value: String,
}

/// Parses a single content line into its components.
///
/// Format: `[group.]name[;param[=value]]*:value`. A parameter without `=`
/// is the vCard 2.1 shorthand for a TYPE value (e.g. `TEL;HOME;VOICE:...`).
///
/// ## Errors
/// Returns an error if the line is missing the colon separator, the name is
/// not a valid property name, or a parameter is malformed.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon_pos = find_value_separator(line).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            "missing colon separator",
        )
    })?;

    let (name_params, value) = line.split_at(colon_pos);
    let value = &value[1..];

    let (group, name_params) = parse_group(name_params);

    let (name, params_str) = match name_params.find(';') {
        Some(semi_pos) => (&name_params[..semi_pos], Some(&name_params[semi_pos + 1..])),
        None => (name_params, None),
    };

    if name.is_empty() || !is_name(name) {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            format!("invalid property name: {name}"),
        ));
    }

    let params = match params_str {
        Some(params_str) => parse_parameters(params_str, line_num)?,
        None => ParameterSet::new(),
    };

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from value.
///
/// Quoted parameter values may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

fn is_name(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    if let Some(dot_pos) = s.find('.') {
        let potential_group = &s[..dot_pos];
        if !potential_group.is_empty() && is_name(potential_group) {
            return (Some(potential_group), &s[dot_pos + 1..]);
        }
    }
    (None, s)
}

/// Parses the parameter section of a content line.
fn parse_parameters(s: &str, line_num: usize) -> ParseResult<ParameterSet> {
    let mut set = ParameterSet::new();
    let mut remaining = s;

    while !remaining.is_empty() {
        let (param, rest) = parse_single_parameter(remaining, line_num)?;
        set.push(param);
        remaining = rest;
    }

    Ok(set)
}

/// Parses a single parameter and returns the remaining string.
fn parse_single_parameter(s: &str, line_num: usize) -> ParseResult<(Parameter, &str)> {
    match s.find([';', '=']) {
        Some(pos) if s.as_bytes()[pos] == b'=' => {
            let name = &s[..pos];
            if name.is_empty() {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidParameter,
                    line_num,
                    "empty parameter name",
                ));
            }
            let (values, remaining) = parse_param_values(&s[pos + 1..]);
            Ok((Parameter::multi(name, values), remaining))
        }
        // No `=` before the next `;` (or end): a bare 2.1-style TYPE value.
        found => {
            let (value, rest) = match found {
                Some(semi_pos) => (&s[..semi_pos], &s[semi_pos + 1..]),
                None => (s, ""),
            };
            Ok((Parameter::new(params::TYPE, value), rest))
        }
    }
}

/// Parses parameter values (comma-separated, possibly quoted) up to the
/// next unquoted `;`, decoding RFC 6868 caret escapes.
fn parse_param_values(s: &str) -> (Vec<String>, &str) {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = s.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current)),
            ';' if !in_quotes => {
                values.push(current);
                return (values, &s[i + 1..]);
            }
            '^' => match chars.next() {
                Some((_, 'n')) => current.push('\n'),
                Some((_, '\'')) => current.push('"'),
                Some((_, '^')) => current.push('^'),
                Some((_, other)) => {
                    current.push('^');
                    current.push(other);
                }
                None => current.push('^'),
            },
            _ => current.push(c),
        }
    }

    values.push(current);
    (values, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfold_crlf() {
        assert_eq!(unfold("FN:John\r\n  Doe"), "FN:John Doe");
        assert_eq!(unfold("FN:John\r\n Doe"), "FN:JohnDoe");
    }

    #[test]
    fn unfold_bare_lf() {
        assert_eq!(unfold("FN:John\n Doe"), "FN:JohnDoe");
    }

    #[test]
    fn unfold_tab() {
        assert_eq!(unfold("FN:John\r\n\tDoe"), "FN:JohnDoe");
    }

    #[test]
    fn unfold_keeps_line_breaks() {
        assert_eq!(unfold("LINE1\r\nLINE2"), "LINE1\nLINE2");
    }

    #[test]
    fn split_lines_filters_empty() {
        assert_eq!(split_lines("LINE1\n\nLINE2\n"), vec!["LINE1", "LINE2"]);
    }

    #[test]
    fn parse_simple_line() {
        let line = parse_content_line("FN:John Doe", 1).unwrap();
        assert!(line.group.is_none());
        assert_eq!(line.name, "FN");
        assert!(line.params.is_empty());
        assert_eq!(line.value, "John Doe");
    }

    #[test]
    fn parse_grouped_line() {
        let line = parse_content_line("item1.TEL:+1-555-555-5555", 1).unwrap();
        assert_eq!(line.group, Some("item1".to_string()));
        assert_eq!(line.name, "TEL");
    }

    #[test]
    fn parse_with_parameters() {
        let line = parse_content_line("TEL;TYPE=home,voice;PREF=1:+1-555-555-5555", 1).unwrap();
        assert_eq!(line.name, "TEL");
        assert_eq!(line.params.get_all("TYPE"), vec!["home", "voice"]);
        assert_eq!(line.params.get("PREF"), Some("1"));
    }

    #[test]
    fn parse_bare_parameters_as_type() {
        // vCard 2.1 shorthand
        let line = parse_content_line("TEL;HOME;VOICE:+1-555-555-5555", 1).unwrap();
        assert_eq!(line.params.get_all("TYPE"), vec!["HOME", "VOICE"]);
    }

    #[test]
    fn parse_mixed_bare_and_named() {
        let line = parse_content_line("LOGO;BASE64;TYPE=GIF:R0lGODdh", 1).unwrap();
        assert_eq!(line.params.get_all("TYPE"), vec!["BASE64", "GIF"]);
    }

    #[test]
    fn parse_quoted_param() {
        let line = parse_content_line("LOGO;X-NOTE=\"a;b,c:d\":http://x.com", 1).unwrap();
        assert_eq!(line.params.get("X-NOTE"), Some("a;b,c:d"));
        assert_eq!(line.value, "http://x.com");
    }

    #[test]
    fn parse_caret_escapes() {
        let line = parse_content_line("LOGO;X-NOTE=say ^'hi^' ^n done:v", 1).unwrap();
        assert_eq!(line.params.get("X-NOTE"), Some("say \"hi\" \n done"));
    }

    #[test]
    fn parse_colon_in_value() {
        let line = parse_content_line("URL:https://example.com:8080/path", 1).unwrap();
        assert_eq!(line.value, "https://example.com:8080/path");
    }

    #[test]
    fn reject_missing_colon() {
        assert!(parse_content_line("FN John Doe", 3).is_err());
    }

    #[test]
    fn reject_invalid_name() {
        assert!(parse_content_line("F N:John", 1).is_err());
    }
}
