//! Utility functions for reading list-valued headers.

use std::str::FromStr;

use http::header::{GetAll, HeaderValue};

use crate::error::{Error, Result};

/// Reads a comma-delimited raw string into a Vec.
///
/// Whitespace around each comma is ignored, and so are empty entries at the
/// end of the list. Any other entry that fails to parse fails the whole list.
pub(crate) fn from_comma_delimited<T>(raw: &str) -> Result<Vec<T>>
where
    T: FromStr<Err = Error>,
{
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    while parts.last() == Some(&"") {
        parts.pop();
    }
    parts.into_iter().map(str::parse).collect()
}

/// Folds every line of a header into one comma-delimited string.
///
/// A header sent several times is equivalent to one line with the values
/// joined by commas, in order. An absent header folds to an empty string.
pub(crate) fn fold_values(values: GetAll<'_, HeaderValue>) -> Result<String> {
    let mut folded = String::new();
    for value in values {
        let value = value.to_str().map_err(Error::new_encoding)?;
        if !folded.is_empty() {
            folded.push_str(", ");
        }
        folded.push_str(value);
    }
    Ok(folded)
}
