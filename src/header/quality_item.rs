//! Provides a struct for quality values.
//!
//! [RFC7231 Section 5.3.1](https://tools.ietf.org/html/rfc7231#section-5.3.1)
//! gives more information on quality values in HTTP header fields.

use std::num::ParseFloatError;
use std::str::FromStr;

use crate::error::Error;

/// Separates an item from its quality value.
const QUALITY_MARKER: &str = ";q=";

/// Represents an item with a quality value as defined in
/// [RFC7231](https://tools.ietf.org/html/rfc7231#section-5.3.1).
///
/// Browsers are not always compliant, so the quality is not range checked.
/// Anything that parses as a finite number is kept and only affects ordering.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct QualityItem<T> {
    /// The actual contents of the field.
    pub(crate) item: T,
    /// The quality (client or server preference) for the value.
    pub(crate) quality: f64,
}

impl<T> QualityItem<T> {
    pub(crate) fn new(item: T, quality: f64) -> QualityItem<T> {
        QualityItem { item, quality }
    }
}

/// Wraps a value in a `QualityItem` with the default `q` of 1.0.
pub(crate) fn qitem<T>(item: T) -> QualityItem<T> {
    QualityItem::new(item, 1.0)
}

impl<T: FromStr<Err = Error>> FromStr for QualityItem<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<QualityItem<T>, Error> {
        let mut parts = s.split(QUALITY_MARKER);
        let raw_item = parts.next().unwrap_or("").trim();
        let raw_quality = parts.next();
        if parts.next().is_some() {
            return Err(Error::new_duplicate_quality());
        }

        let item = raw_item.parse()?;
        match raw_quality {
            Some(q) => Ok(QualityItem::new(item, parse_quality(q.trim())?)),
            None => Ok(qitem(item)),
        }
    }
}

fn parse_quality(s: &str) -> Result<f64, Error> {
    let quality = s
        .parse::<f64>()
        .map_err(|e| Error::new_quality(Some(e)))?;
    if quality.is_finite() {
        Ok(quality)
    } else {
        Err(Error::new_quality(None::<ParseFloatError>))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Language;

    fn lang(s: &str) -> Language {
        s.parse().unwrap()
    }

    #[test]
    fn test_quality_item_from_str1() {
        let x: QualityItem<Language> = "en".parse().unwrap();
        assert_eq!(x, qitem(lang("en")));
    }

    #[test]
    fn test_quality_item_from_str2() {
        let x: QualityItem<Language> = "en-gb;q=0.8".parse().unwrap();
        assert_eq!(x, QualityItem::new(lang("en-GB"), 0.8));
    }

    #[test]
    fn test_quality_item_out_of_range() {
        let x: QualityItem<Language> = "fr;q=2.5".parse().unwrap();
        assert_eq!(x.quality, 2.5);
        let x: QualityItem<Language> = "fr;q=-1".parse().unwrap();
        assert_eq!(x.quality, -1.0);
        let x: QualityItem<Language> = "fr;q=1e39".parse().unwrap();
        assert_eq!(x.quality, 1e39);
    }

    #[test]
    fn test_quality_item_bad_quality() {
        let err = "en;q=abc".parse::<QualityItem<Language>>().unwrap_err();
        assert!(err.is_quality());
        let err = "en;q=".parse::<QualityItem<Language>>().unwrap_err();
        assert!(err.is_quality());
        let err = "en;q=NaN".parse::<QualityItem<Language>>().unwrap_err();
        assert!(err.is_quality());
        let err = "en;q=inf".parse::<QualityItem<Language>>().unwrap_err();
        assert!(err.is_quality());
        let err = "en;q=1e400".parse::<QualityItem<Language>>().unwrap_err();
        assert!(err.is_quality());
    }

    #[test]
    fn test_quality_item_duplicate_quality() {
        let err = "en;q=0.5;q=0.3".parse::<QualityItem<Language>>().unwrap_err();
        assert!(err.is_quality());
        assert!(!err.is_tag());
    }

    #[test]
    fn test_quality_item_bad_tag() {
        assert!("123;q=0.5".parse::<QualityItem<Language>>().unwrap_err().is_tag());
        // only the literal `;q=` marker is recognized
        assert!("en; q=0.5".parse::<QualityItem<Language>>().unwrap_err().is_tag());
    }
}
