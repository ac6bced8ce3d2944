//! The `Accept-Language` header and language tags.
//!
//! Browsers send `Accept-Language` to say which response languages they
//! accept, each optionally weighted with a quality value:
//!
//! ```text
//! Accept-Language: da, en-gb;q=0.8, en;q=0.7
//! ```
//!
//! [`parse`] turns such a value into a list of [`Language`]s ranked by
//! preference. The header is untrusted input, so a value that doesn't
//! follow the grammar is rejected as a whole rather than partially read.

pub use self::accept_language::parse;
pub use self::language::Language;

pub(crate) use self::parsing::fold_values;

mod accept_language;
mod language;
mod parsing;
mod quality_item;
