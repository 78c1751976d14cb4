//! HTML-embedding codec.
//!
//! Contact properties embedded in HTML (hCard-style) are exchanged through
//! `<img>` elements whose `src` is either a `data:` URI or a remote URL.
//!
//! ## Usage
//!
//! ```rust
//! use hagaki::vcard::html;
//!
//! let mut warnings = Vec::new();
//! let logos = html::scan_logos(
//!     "<div><img src=\"data:image/png;base64,QQ==\"/></div>",
//!     &mut warnings,
//! )
//! .unwrap();
//!
//! assert_eq!(logos[0].data(), Some([0x41].as_slice()));
//! ```

mod element;
mod error;
mod marshal;
mod unmarshal;

pub use element::{MarkupElement, collect_elements};
pub use error::{MarkupError, MarkupErrorKind, MarkupResult};
pub use marshal::marshal_logo;
pub use unmarshal::{scan_logos, unmarshal_logo};
