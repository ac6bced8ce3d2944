//! Error and Result module.
use std::error::Error as StdError;
use std::fmt;

/// Result type often returned from methods that can have `Error`s.
pub type Result<T> = std::result::Result<T, Error>;

type Cause = Box<dyn StdError + Send + Sync>;

/// Represents errors that can occur reading an `Accept-Language` header.
///
/// A malformed header is never trusted as a whole: when any entry fails to
/// parse, the entire header is rejected with one of these.
pub struct Error {
    inner: Box<ErrorImpl>,
}

struct ErrorImpl {
    kind: Kind,
    cause: Option<Cause>,
}

#[derive(Debug, PartialEq)]
pub(crate) enum Kind {
    Parse(Parse),
}

#[derive(Debug, PartialEq)]
pub(crate) enum Parse {
    /// A language tag contained something other than letters and hyphens.
    Tag,
    /// A quality value was not a number.
    Quality,
    /// An entry carried more than one quality marker.
    DuplicateQuality,
    /// The header value was not visible ASCII.
    Encoding,
}

impl Error {
    /// Returns true if this was an `Accept-Language` parse error.
    pub fn is_parse(&self) -> bool {
        match self.inner.kind {
            Kind::Parse(_) => true,
        }
    }

    /// Returns true if a language tag was malformed.
    pub fn is_tag(&self) -> bool {
        self.inner.kind == Kind::Parse(Parse::Tag)
    }

    /// Returns true if a quality value was malformed or repeated.
    pub fn is_quality(&self) -> bool {
        match self.inner.kind {
            Kind::Parse(Parse::Quality) | Kind::Parse(Parse::DuplicateQuality) => true,
            _ => false,
        }
    }

    /// Consumes the error, returning its cause.
    pub fn into_cause(self) -> Option<Box<dyn StdError + Send + Sync>> {
        self.inner.cause
    }

    pub(crate) fn new(kind: Kind, cause: Option<Cause>) -> Error {
        Error {
            inner: Box::new(ErrorImpl { kind, cause }),
        }
    }

    pub(crate) fn new_tag() -> Error {
        Error::new(Kind::Parse(Parse::Tag), None)
    }

    pub(crate) fn new_quality<E: Into<Cause>>(cause: Option<E>) -> Error {
        Error::new(Kind::Parse(Parse::Quality), cause.map(Into::into))
    }

    pub(crate) fn new_duplicate_quality() -> Error {
        Error::new(Kind::Parse(Parse::DuplicateQuality), None)
    }

    pub(crate) fn new_encoding<E: Into<Cause>>(cause: E) -> Error {
        Error::new(Kind::Parse(Parse::Encoding), Some(cause.into()))
    }

    fn description(&self) -> &str {
        match self.inner.kind {
            Kind::Parse(Parse::Tag) => "invalid language tag in Accept-Language",
            Kind::Parse(Parse::Quality) => "invalid quality value in Accept-Language",
            Kind::Parse(Parse::DuplicateQuality) => "repeated quality value in Accept-Language",
            Kind::Parse(Parse::Encoding) => "Accept-Language is not visible ASCII",
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("Error");
        f.field("kind", &self.inner.kind);
        if let Some(ref cause) = self.inner.cause {
            f.field("cause", cause);
        }
        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref cause) = self.inner.cause {
            write!(f, "{}: {}", self.description(), cause)
        } else {
            f.write_str(self.description())
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .cause
            .as_ref()
            .map(|cause| &**cause as &(dyn StdError + 'static))
    }
}

#[doc(hidden)]
trait AssertSendSync: Send + Sync + 'static {}
#[doc(hidden)]
impl AssertSendSync for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_error_keeps_cause() {
        let cause = "abc".parse::<f64>().unwrap_err();
        let err = Error::new_quality(Some(cause));
        assert!(err.is_parse());
        assert!(err.is_quality());
        assert!(!err.is_tag());
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid quality value"));
    }

    #[test]
    fn tag_error_has_no_cause() {
        let err = Error::new_tag();
        assert!(err.is_tag());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "invalid language tag in Accept-Language");
        assert!(err.into_cause().is_none());
    }

    #[test]
    fn duplicate_quality_is_a_quality_error() {
        let err = Error::new_duplicate_quality();
        assert!(err.is_quality());
        assert_eq!(format!("{:?}", err), "Error { kind: Parse(DuplicateQuality) }");
    }
}
