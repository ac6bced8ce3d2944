use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A language tag, such as `en`, `en-US` or `zh-CN`.
/// See http://www.w3.org/Protocols/rfc2616/rfc2616-sec3.html#sec3.10
///
/// Nothing is assumed about the structure of a tag beyond a primary part
/// and an optional region, split on the last hyphen. Tags parsed out of a
/// header are canonicalized: the primary part is lowercase and the region
/// uppercase.
///
/// Tags built with `From<&str>` or `From<String>` are kept verbatim. Those
/// are meant for application supplied preferences, which are trusted as-is.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Language(String);

impl Language {
    /// Builds the canonical form of an already validated tag.
    pub(crate) fn canonical(tag: &str) -> Language {
        let mut tag = tag.to_ascii_lowercase();
        if let Some(idx) = tag.rfind('-') {
            tag[idx + 1..].make_ascii_uppercase();
        }
        Language(tag)
    }

    /// Returns the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part before the last hyphen, or the whole tag if there
    /// is no hyphen.
    ///
    /// ```
    /// # use http_accept_language::Language;
    /// let lang: Language = "zh-hant-tw".parse().unwrap();
    /// assert_eq!(lang.primary(), "zh-hant");
    /// ```
    pub fn primary(&self) -> &str {
        match self.0.rfind('-') {
            Some(idx) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Returns the part after the last hyphen, if any.
    pub fn region(&self) -> Option<&str> {
        self.0.rfind('-').map(|idx| &self.0[idx + 1..])
    }
}

/// Returns true if `tag` only holds ASCII letters and hyphens.
fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.bytes().all(|b| b.is_ascii_alphabetic() || b == b'-')
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Language, Error> {
        if is_valid_tag(s) {
            Ok(Language::canonical(s))
        } else {
            Err(Error::new_tag())
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Language {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl<'a> From<&'a str> for Language {
    fn from(tag: &'a str) -> Language {
        Language(tag.to_owned())
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Language {
        Language(tag)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> String {
        language.0
    }
}

impl PartialEq<str> for Language {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<'a> PartialEq<&'a str> for Language {
    fn eq(&self, other: &&'a str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for Language {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Language> for str {
    fn eq(&self, other: &Language) -> bool {
        other == self
    }
}

impl<'a> PartialEq<Language> for &'a str {
    fn eq(&self, other: &Language) -> bool {
        other == *self
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Language, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <String as serde::Deserialize>::deserialize(deserializer).map(Language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), "en");
        assert_eq!("EN-us".parse::<Language>().unwrap(), "en-US");
        assert_eq!("FR".parse::<Language>().unwrap(), "fr");
        assert_eq!("zh-hant-tw".parse::<Language>().unwrap(), "zh-hant-TW");
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("".parse::<Language>().unwrap_err().is_tag());
        assert!("en_US".parse::<Language>().unwrap_err().is_tag());
        assert!("123".parse::<Language>().unwrap_err().is_tag());
        assert!("*".parse::<Language>().unwrap_err().is_tag());
    }

    #[test]
    fn test_parts() {
        let lang: Language = "en-gb".parse().unwrap();
        assert_eq!(lang.primary(), "en");
        assert_eq!(lang.region(), Some("GB"));

        let lang: Language = "da".parse().unwrap();
        assert_eq!(lang.primary(), "da");
        assert_eq!(lang.region(), None);
    }

    #[test]
    fn test_verbatim() {
        let lang = Language::from("EN-us");
        assert_eq!(lang.as_str(), "EN-us");
        assert_eq!(lang.to_string(), "EN-us");
        assert_eq!(String::from(lang), "EN-us");
    }
}
