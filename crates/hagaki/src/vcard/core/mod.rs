//! vCard core types.
//!
//! This module provides the foundational types for representing vCard data:
//!
//! - [`VCard`] - Complete vCard representation
//! - [`VCardProperty`] - Individual property with parameters and value
//! - [`ParameterSet`] - Ordered, case-insensitive property parameters
//! - [`VCardValue`] - Property value variants
//!
//! ## Binary attachments
//!
//! - [`BinaryProperty`] - A property carrying either a remote URL or inline
//!   bytes (LOGO and friends)
//! - [`ImageType`] - Content-type tag with well-known and ad-hoc instances
//!
//! ## Example
//!
//! ```rust
//! use hagaki::vcard::core::{BinaryProperty, ImageType, VCard, VCardProperty, names};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::text("FN", "John Doe"));
//!
//! let logo = BinaryProperty::with_url(names::LOGO, "http://example.com/a.png",
//!     Some(ImageType::PNG));
//! card.add_binary(&logo).unwrap();
//! ```

mod binary;
mod media;
mod parameter;
mod property;
mod vcard;

pub use binary::{BinaryProperty, BinarySource};
pub use media::ImageType;
pub use parameter::{Parameter, ParameterSet, params};
pub use property::{VCardProperty, VCardValue, names};
pub use vcard::{VCard, VCardVersion};
