//! Matching preferred languages against the locales an application supports.
//!
//! Both lookups walk the preferences in priority order, so the user's most
//! preferred language that can be served always wins, whatever order the
//! supported locales are listed in.

use crate::header::Language;

/// Returns the most preferred language that is also in `candidates`.
///
/// Candidates are compared verbatim against the preferences, by their string
/// form.
///
/// ```
/// use http_accept_language::{first_exact_match, Language};
///
/// let preferences = [Language::from("en-US"), Language::from("en")];
/// assert_eq!(first_exact_match(&preferences, &["fr", "en"]).unwrap(), "en");
/// ```
pub fn first_exact_match<'p, T>(preferences: &'p [Language], candidates: &[T]) -> Option<&'p Language>
where
    T: AsRef<str>,
{
    preferences.iter().find(|language| {
        candidates
            .iter()
            .any(|candidate| candidate.as_ref() == language.as_str())
    })
}

/// Returns the first candidate compatible with the most preferred language
/// possible, ignoring region.
///
/// A candidate is compatible with a preference when it is equal to it, or
/// starts with it followed by a hyphen: `en` matches `en-GB` but not `eng`.
///
/// ```
/// use http_accept_language::{first_prefix_match, Language};
///
/// let preferences = [Language::from("en")];
/// assert_eq!(first_prefix_match(&preferences, &["en-GB", "fr-FR"]), Some(&"en-GB"));
/// ```
pub fn first_prefix_match<'c, T>(preferences: &[Language], candidates: &'c [T]) -> Option<&'c T>
where
    T: AsRef<str>,
{
    preferences.iter().find_map(|language| {
        candidates
            .iter()
            .find(|candidate| is_compatible(language.as_str(), candidate.as_ref()))
    })
}

fn is_compatible(preference: &str, candidate: &str) -> bool {
    match candidate.strip_prefix(preference) {
        Some(rest) => rest.is_empty() || rest.starts_with('-'),
        None => false,
    }
}
