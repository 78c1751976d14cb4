//! vCard text parsing.
//!
//! ## Usage
//!
//! ```rust
//! use hagaki::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! END:VCARD\r\n";
//!
//! let mut warnings = Vec::new();
//! let cards = parse::parse(input, &mut warnings).unwrap();
//! assert_eq!(cards[0].formatted_name(), Some("John Doe"));
//! ```
//!
//! ## Features
//!
//! - vCard 2.1, 3.0, and 4.0, including the 2.1 bare-parameter TYPE
//!   shorthand
//! - Line unfolding, quoted parameter values, RFC 6868 caret decoding
//! - Binary property unmarshal: base64 + ENCODING for legacy versions,
//!   `data:` URIs for 4.0
//! - Warning-based recovery: malformed properties are dropped, not fatal

pub mod binary;
mod error;
mod lexer;
mod parser;
mod values;

pub use binary::unmarshal_binary;
pub use error::{DecodeError, ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, parse_content_line, split_lines, unfold};
pub use parser::{parse, parse_single};
pub use values::{split_component, unescape_text};
