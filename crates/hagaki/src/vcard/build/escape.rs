//! vCard text escaping.

/// Escapes a text value for vCard serialization.
///
/// Escapes backslash, newline, comma, and semicolon. CR is dropped;
/// newlines are always written as `\n`.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\r' => {}
            _ => result.push(c),
        }
    }

    result
}

/// Escapes a parameter value using RFC 6868 caret encoding.
///
/// Returns `(value, needs_quotes)`; values containing `:`, `;`, or `,`
/// must be emitted inside double quotes.
#[must_use]
pub fn escape_param_value(s: &str) -> (String, bool) {
    let mut result = String::with_capacity(s.len());
    let mut needs_quotes = false;

    for c in s.chars() {
        match c {
            '^' => result.push_str("^^"),
            '\n' => result.push_str("^n"),
            '"' => result.push_str("^'"),
            ':' | ';' | ',' => {
                result.push(c);
                needs_quotes = true;
            }
            _ if c.is_control() => {}
            _ => result.push(c),
        }
    }

    (result, needs_quotes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_text_plain() {
        assert_eq!(escape_text("hello"), "hello");
    }

    #[test]
    fn escape_text_special() {
        assert_eq!(escape_text("a,b;c\\d"), "a\\,b\\;c\\\\d");
        assert_eq!(escape_text("line1\r\nline2"), "line1\\nline2");
    }

    #[test]
    fn escape_param_plain() {
        let (val, needs_quotes) = escape_param_value("simple");
        assert_eq!(val, "simple");
        assert!(!needs_quotes);
    }

    #[test]
    fn escape_param_quoting_triggers() {
        let (val, needs_quotes) = escape_param_value("value:with;delims");
        assert_eq!(val, "value:with;delims");
        assert!(needs_quotes);
    }

    #[test]
    fn escape_param_caret_codes() {
        let (val, _) = escape_param_value("a^b\nc\"d");
        assert_eq!(val, "a^^b^nc^'d");
    }
}
