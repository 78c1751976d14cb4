//! vCard contact-record codec.
//!
//! `hagaki` parses, represents, and generates vCard data in the 2.1
//! (vCard 2.1), 3.0 (RFC 2426), and 4.0 (RFC 6350) formats, including the
//! binary-attachment properties (LOGO) that carry either a remote URL or
//! inline base64 content, and an HTML-embedding codec for `<img>` elements.
//!
//! ## Parsing
//!
//! ```rust
//! use hagaki::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! LOGO:http://example.com/logo.png\r\n\
//! END:VCARD\r\n";
//!
//! let mut warnings = Vec::new();
//! let cards = parse::parse(input, &mut warnings).unwrap();
//! assert_eq!(cards[0].formatted_name(), Some("John Doe"));
//! ```
//!
//! ## Serializing
//!
//! ```rust
//! use hagaki::vcard::{VCard, VCardProperty, build};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::text("FN", "Jane Doe"));
//!
//! let output = build::serialize(&[card]);
//! assert!(output.contains("FN:Jane Doe"));
//! ```

pub mod error;
pub mod vcard;

pub use error::{CardError, CardResult, Skip};
