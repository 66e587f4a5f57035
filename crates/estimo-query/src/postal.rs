//! Postal code validation for free-text input.
//!
//! Input is a comma separated list such as `"00740, 02320"`. One bad token
//! rejects the whole batch; tokens are never dropped silently.

use crate::error::{QueryError, QueryResult};

/// Number of digits in a Finnish postal code
pub const POSTAL_CODE_LEN: usize = 5;

/// Split, trim and validate a comma separated list of postal codes.
///
/// Blank input yields an empty list. The first token that is not exactly
/// five ASCII digits is reported.
///
/// # Examples
/// ```
/// use estimo_query::parse_postal_codes;
/// assert_eq!(parse_postal_codes("00740, 02320").unwrap(), vec!["00740", "02320"]);
/// assert!(parse_postal_codes("").unwrap().is_empty());
/// assert!(parse_postal_codes("00740, 2320").is_err());
/// ```
pub fn parse_postal_codes(input: &str) -> QueryResult<Vec<String>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(str::trim)
        .map(|token| {
            if is_postal_code(token) {
                Ok(token.to_string())
            } else {
                Err(QueryError::InvalidPostalCode {
                    token: token.to_string(),
                })
            }
        })
        .collect()
}

/// Check a single token.
pub fn is_postal_code(token: &str) -> bool {
    token.len() == POSTAL_CODE_LEN && token.bytes().all(|b| b.is_ascii_digit())
}
