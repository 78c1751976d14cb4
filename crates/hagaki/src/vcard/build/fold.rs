//! vCard line folding.

/// Maximum line length in octets (not characters).
const MAX_LINE_OCTETS: usize = 75;

/// Folds a line to the maximum length.
///
/// Lines longer than 75 octets are folded by inserting CRLF + space at
/// UTF-8 character boundaries. Continuation lines reserve one octet for
/// the leading space.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + 3 * (line.len() / MAX_LINE_OCTETS));
    let mut budget = MAX_LINE_OCTETS;
    let mut current_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();

        if current_len + char_len > budget {
            result.push_str("\r\n ");
            current_len = 1;
            budget = MAX_LINE_OCTETS;
        }

        result.push(c);
        current_len += char_len;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_unchanged() {
        let line = "FN:John Doe";
        assert_eq!(fold_line(line), line);
    }

    #[test]
    fn fold_at_75_octets() {
        let folded = fold_line(&"X".repeat(80));
        let first_line: String = folded.chars().take_while(|&c| c != '\r').collect();
        assert_eq!(first_line.len(), 75);
    }

    #[test]
    fn fold_respects_utf8() {
        // 日 is 3 bytes in UTF-8
        let line = format!("NOTE:{}", "日".repeat(30));
        let folded = fold_line(&line);

        for part in folded.split("\r\n ") {
            assert!(part.is_char_boundary(part.len()));
            assert!(std::str::from_utf8(part.as_bytes()).is_ok());
        }
    }

    #[test]
    fn fold_multiple_times() {
        let folded = fold_line(&"X".repeat(200));
        assert!(folded.matches("\r\n ").count() >= 2);

        for (i, part) in folded.split("\r\n ").enumerate() {
            let limit = if i == 0 {
                MAX_LINE_OCTETS
            } else {
                MAX_LINE_OCTETS - 1
            };
            assert!(part.len() <= limit);
        }
    }
}
