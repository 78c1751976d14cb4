//! vCard serialization.
//!
//! ## Usage
//!
//! ```rust
//! use hagaki::vcard::core::{BinaryProperty, ImageType, VCard, VCardProperty, names};
//! use hagaki::vcard::build;
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::text("FN", "Jane Doe"));
//!
//! let logo = BinaryProperty::with_data(names::LOGO, vec![0x41], Some(ImageType::PNG));
//! card.add_binary(&logo).unwrap();
//!
//! let output = build::serialize_single(&card);
//! assert!(output.contains("LOGO:data:image/png;base64,QQ==\r\n"));
//! ```

pub mod binary;
mod escape;
mod fold;
mod serializer;

pub use binary::marshal_binary;
pub use escape::{escape_param_value, escape_text};
pub use fold::fold_line;
pub use serializer::{serialize, serialize_single};
