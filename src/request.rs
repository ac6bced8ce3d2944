//! A request decorated with its preferred languages.

use std::ops::{Deref, DerefMut};

use http::Request;

use crate::header::Language;
use crate::preferences::{Builder, Preferences};

/// An `http::Request` together with the languages its client prefers.
///
/// The preferences are taken from the headers at the time the request is
/// wrapped. Header changes made afterwards through `DerefMut` are not
/// observed, use
/// [`set_preferred_languages`](Localized::set_preferred_languages) instead.
///
/// # Example
///
/// ```
/// use http::Request;
/// use http_accept_language::Localized;
///
/// let req = Request::builder()
///     .header("accept-language", "nl-BE, nl;q=0.9, en;q=0.5")
///     .body(())
///     .unwrap();
/// let req = Localized::new(req);
///
/// assert_eq!(req.preferred_language_from(&["en", "nl"]).unwrap(), "nl");
/// assert_eq!(req.compatible_language_from(&["en-US", "nl-NL"]), Some(&"nl-NL"));
/// ```
#[derive(Debug)]
pub struct Localized<B> {
    request: Request<B>,
    preferences: Preferences,
}

impl<B> Localized<B> {
    /// Wraps a request, reading the `Accept-Language` header.
    pub fn new(request: Request<B>) -> Localized<B> {
        Builder::new().wrap(request)
    }

    /// Creates a `Localized` from a request and already built preferences.
    pub fn from_parts(request: Request<B>, preferences: Preferences) -> Localized<B> {
        Localized {
            request,
            preferences,
        }
    }

    /// Returns the preferred languages, most preferred first.
    ///
    /// A missing or malformed header gives an empty list.
    pub fn preferred_languages(&self) -> &[Language] {
        self.preferences.get()
    }

    /// Overrides the preferred languages, for instance with a choice stored
    /// in the session.
    pub fn set_preferred_languages<I, L>(&mut self, languages: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<Language>,
    {
        self.preferences.set(languages);
    }

    /// Returns the most preferred language that is also in `candidates`.
    pub fn preferred_language_from<T>(&self, candidates: &[T]) -> Option<&Language>
    where
        T: AsRef<str>,
    {
        self.preferences.preferred_language_from(candidates)
    }

    /// Returns the first candidate compatible with the most preferred
    /// language possible, ignoring region.
    pub fn compatible_language_from<'c, T>(&self, candidates: &'c [T]) -> Option<&'c T>
    where
        T: AsRef<str>,
    {
        self.preferences.compatible_language_from(candidates)
    }

    /// Returns a reference to the preferences.
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Returns a mutable reference to the preferences.
    pub fn preferences_mut(&mut self) -> &mut Preferences {
        &mut self.preferences
    }

    /// Consumes the wrapper, returning the request.
    pub fn into_inner(self) -> Request<B> {
        self.request
    }

    /// Consumes the wrapper, returning the request and its preferences.
    pub fn into_parts(self) -> (Request<B>, Preferences) {
        (self.request, self.preferences)
    }
}

impl<B> Deref for Localized<B> {
    type Target = Request<B>;

    fn deref(&self) -> &Request<B> {
        &self.request
    }
}

impl<B> DerefMut for Localized<B> {
    fn deref_mut(&mut self) -> &mut Request<B> {
        &mut self.request
    }
}
