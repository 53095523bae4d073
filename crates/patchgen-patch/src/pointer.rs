//! Pointer parsing for patch application.
//!
//! Pointers are slash-delimited: `/Parent/Child`. The empty pointer addresses
//! the whole document. Segments are unescaped following RFC 6901 (`~1` becomes
//! `/`, `~0` becomes `~`). Generated paths never escape property names, so a
//! generated path for a name containing `/` or `~` does not round-trip.

use json_patch::jsonptr::{PointerBuf, Report};

use crate::error::PatchResult;

/// Split a pointer into its unescaped segments.
///
/// # Examples
///
/// ```
/// use patchgen_patch::parse_pointer;
///
/// assert_eq!(parse_pointer("/a/b").unwrap(), vec!["a", "b"]);
/// assert_eq!(parse_pointer("").unwrap(), Vec::<String>::new());
/// assert!(parse_pointer("a/b").is_err());
/// ```
pub fn parse_pointer(pointer: &str) -> PatchResult<Vec<String>> {
    let parsed = PointerBuf::parse(pointer).map_err(Report::into_original)?;
    Ok(parsed
        .tokens()
        .map(|token| token.decoded().into_owned())
        .collect())
}
