//! Per-request language preferences.

use std::cell::OnceCell;

use http::header::{HeaderName, ACCEPT_LANGUAGE};
use http::{HeaderMap, Request};

use crate::error::Result;
use crate::header::{self, Language};
use crate::matcher;
use crate::request::Localized;

/// The preferred languages of a single request.
///
/// The header is parsed the first time the preferences are read, and the
/// result is kept for the lifetime of the value. A malformed header reads as
/// "no preference", an empty list. An explicit list given to
/// [`set`](Preferences::set) replaces whatever the header says.
///
/// `Preferences` belong to one request and are not meant to be shared
/// between threads.
#[derive(Debug)]
pub struct Preferences {
    raw: Result<String>,
    resolved: OnceCell<Vec<Language>>,
}

impl Preferences {
    /// Creates preferences backed by a raw `Accept-Language` value.
    ///
    /// ```
    /// # use http_accept_language::Preferences;
    /// let prefs = Preferences::new(Some("en-US,en;q=0.9"));
    /// assert_eq!(prefs.get(), ["en-US", "en"]);
    ///
    /// assert!(Preferences::new(None).get().is_empty());
    /// ```
    pub fn new(raw: Option<&str>) -> Preferences {
        Preferences::from_raw(Ok(raw.unwrap_or_default().to_owned()))
    }

    /// Creates preferences from the `Accept-Language` lines of a header map.
    pub fn from_headers(headers: &HeaderMap) -> Preferences {
        Builder::new().build(headers)
    }

    fn from_raw(raw: Result<String>) -> Preferences {
        Preferences {
            raw,
            resolved: OnceCell::new(),
        }
    }

    /// Returns the preferred languages, most preferred first.
    pub fn get(&self) -> &[Language] {
        self.resolved.get_or_init(|| {
            let resolved = match self.raw {
                Ok(ref raw) => header::parse(raw),
                Err(ref err) => {
                    debug!("unreadable Accept-Language header: {}", err);
                    Ok(Vec::new())
                }
            };
            match resolved {
                Ok(languages) => {
                    trace!("preferred languages: {:?}", languages);
                    languages
                }
                Err(err) => {
                    debug!("ignoring malformed Accept-Language header: {}", err);
                    Vec::new()
                }
            }
        })
    }

    /// Overrides the preferred languages, ignoring the header from now on.
    ///
    /// The languages are used as given, without validation.
    ///
    /// ```
    /// # use http_accept_language::Preferences;
    /// let mut prefs = Preferences::new(Some("da, en;q=0.5"));
    /// prefs.set(vec!["en-US", "en-GB", "en"]);
    /// assert_eq!(prefs.get(), ["en-US", "en-GB", "en"]);
    /// ```
    pub fn set<I, L>(&mut self, languages: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<Language>,
    {
        let languages: Vec<Language> = languages.into_iter().map(Into::into).collect();
        trace!("preferred languages overridden: {:?}", languages);
        self.resolved = OnceCell::from(languages);
    }

    /// Returns true if the languages were set explicitly or already parsed.
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Returns the most preferred language that is also in `candidates`.
    ///
    /// See [`first_exact_match`](crate::first_exact_match).
    pub fn preferred_language_from<T>(&self, candidates: &[T]) -> Option<&Language>
    where
        T: AsRef<str>,
    {
        matcher::first_exact_match(self.get(), candidates)
    }

    /// Returns the first candidate compatible with the most preferred
    /// language possible, ignoring region.
    ///
    /// See [`first_prefix_match`](crate::first_prefix_match).
    pub fn compatible_language_from<'c, T>(&self, candidates: &'c [T]) -> Option<&'c T>
    where
        T: AsRef<str>,
    {
        matcher::first_prefix_match(self.get(), candidates)
    }
}

/// A builder to configure how preferences are read from requests.
///
/// ```
/// use http::header::HeaderName;
/// use http_accept_language::Builder;
///
/// let mut builder = Builder::new();
/// builder.header_name(HeaderName::from_static("x-forwarded-language"));
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    header_name: HeaderName,
}

impl Builder {
    /// Creates a new builder reading the `Accept-Language` header.
    pub fn new() -> Builder {
        Builder {
            header_name: ACCEPT_LANGUAGE,
        }
    }

    /// Sets the header the preferred languages are read from.
    ///
    /// Default is `Accept-Language`.
    pub fn header_name(&mut self, name: HeaderName) -> &mut Builder {
        self.header_name = name;
        self
    }

    /// Builds the preferences for a header map.
    ///
    /// Every line of the configured header is taken into account, in order.
    pub fn build(&self, headers: &HeaderMap) -> Preferences {
        Preferences::from_raw(header::fold_values(headers.get_all(&self.header_name)))
    }

    /// Wraps a request, attaching its preferences.
    pub fn wrap<B>(&self, request: Request<B>) -> Localized<B> {
        let preferences = self.build(request.headers());
        Localized::from_parts(request, preferences)
    }
}

impl Default for Builder {
    fn default() -> Builder {
        Builder::new()
    }
}
