use std::cmp::Ordering;

use crate::error::Result;
use crate::header::parsing::from_comma_delimited;
use crate::header::quality_item::QualityItem;
use crate::header::Language;

/// Parses an `Accept-Language` header value into the languages it names,
/// most preferred first.
///
/// Entries are ordered by their `q` value, highest first. Entries with the
/// same quality keep the order they were sent in. Tags come back in
/// canonical case, so `en-gb` becomes `en-GB`.
///
/// An empty value yields an empty list. If any entry is malformed the whole
/// header is rejected.
///
/// ```
/// let langs = http_accept_language::parse("da, en-gb;q=0.8, en;q=0.7, FR-FR;q=0.9").unwrap();
/// assert_eq!(langs, ["da", "fr-FR", "en-GB", "en"]);
/// ```
pub fn parse(raw: &str) -> Result<Vec<Language>> {
    Ok(parse_weighted(raw)?
        .into_iter()
        .map(|entry| entry.item)
        .collect())
}

/// Parses and ranks the entries, keeping their qualities.
pub(crate) fn parse_weighted(raw: &str) -> Result<Vec<QualityItem<Language>>> {
    let mut entries: Vec<QualityItem<Language>> = from_comma_delimited(raw)?;
    // `sort_by` is stable, ties keep header order. Qualities are never NaN,
    // and `-0` ties with `0`.
    entries.sort_by(|a, b| {
        b.quality
            .partial_cmp(&a.quality)
            .unwrap_or(Ordering::Equal)
    });
    Ok(entries)
}
