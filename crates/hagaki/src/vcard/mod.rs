//! vCard representation, parsing, and generation.
//!
//! ## Overview
//!
//! vCard is a line-oriented text format for contact information. This
//! module supports vCard 2.1, 3.0 (RFC 2426), and 4.0 (RFC 6350), which
//! differ in parameter grammar and in how binary content is carried:
//! legacy versions inline base64 with an ENCODING parameter, 4.0 uses
//! `data:` URIs.
//!
//! ## Round-trip fidelity
//!
//! Properties preserve their raw values and parameter order, and documents
//! serialize properties in the order they were added.
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `BinaryProperty`, ...)
//! - [`parse`] - Text parsing and the binary-property unmarshal
//! - [`build`] - Serialization and the binary-property marshal
//! - [`html`] - HTML-embedding codec for `<img>` elements

pub mod build;
pub mod core;
pub mod html;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use core::{
    BinaryProperty, BinarySource, ImageType, Parameter, ParameterSet, VCard, VCardProperty,
    VCardValue, VCardVersion,
};
pub use parse::{DecodeError, ParseError, ParseResult, parse, parse_single};
