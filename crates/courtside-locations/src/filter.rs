//! Search-expression filtering over the location list.

use regex::RegexBuilder;

use crate::error::FilterError;
use crate::store::LocationRecord;

/// Filter records by a user-supplied search expression.
///
/// An empty pattern returns every record in original order. A non-empty
/// pattern is compiled as a case-insensitive regex and a record is kept iff
/// it matches anywhere within `name` or `address` (partial match).
///
/// Invalid pattern syntax yields [`FilterError::InvalidPattern`]; the caller
/// displays the error and treats the view as empty, never as "all records".
pub fn filter<'a>(
    records: &'a [LocationRecord],
    pattern: &str,
) -> Result<Vec<&'a LocationRecord>, FilterError> {
    if pattern.is_empty() {
        return Ok(records.iter().collect());
    }

    let re = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| FilterError::InvalidPattern(e.to_string()))?;

    Ok(records
        .iter()
        .filter(|r| re.is_match(&r.name) || re.is_match(&r.address))
        .collect())
}
