#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # http-accept-language
//!
//! Reads the languages a client prefers from the HTTP `Accept-Language`
//! request header, and picks the best one among the locales an application
//! supports.
//!
//! A browser sent header is never trusted: a header that can't be parsed
//! reads as "no preference" instead of failing the request. Choosing a
//! default locale when nothing matches is left to the application.
//!
//! # Example
//!
//! ```
//! use http::Request;
//! use http_accept_language::Localized;
//!
//! let req = Request::builder()
//!     .header("accept-language", "da, en-gb;q=0.8, en;q=0.7")
//!     .body(())
//!     .unwrap();
//! let mut req = Localized::new(req);
//!
//! assert_eq!(req.preferred_languages(), ["da", "en-GB", "en"]);
//! // exact match, highest preference first
//! assert_eq!(req.preferred_language_from(&["en", "en-GB"]).unwrap(), "en-GB");
//! // ignoring region
//! assert_eq!(req.compatible_language_from(&["fr", "en-US"]), Some(&"en-US"));
//!
//! // a language picked by the user overrides the header
//! req.set_preferred_languages(vec!["fr"]);
//! assert_eq!(req.compatible_language_from(&["fr", "en-US"]), Some(&"fr"));
//! ```

#[macro_use]
mod trace;

pub use crate::error::{Error, Result};
pub use crate::header::{parse, Language};
pub use crate::matcher::{first_exact_match, first_prefix_match};
pub use crate::preferences::{Builder, Preferences};
pub use crate::request::Localized;

pub mod error;
pub mod header;
mod matcher;
mod preferences;
mod request;
