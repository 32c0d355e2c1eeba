use crate::FlagError;

/// Parses a boolean-like attribute value into a tri-state flag
///
/// The value is trimmed and compared case-insensitively: `"true"` and
/// `"false"` map to `Some(true)` / `Some(false)`, an empty value means
/// "unknown" (`None`), and anything else is an error.
///
/// # Examples
///
/// ```
/// use ompedia_crawler::links::parse_flag;
///
/// assert_eq!(parse_flag(" TRUE ").unwrap(), Some(true));
/// assert_eq!(parse_flag("").unwrap(), None);
/// assert!(parse_flag("yes").is_err());
/// ```
pub fn parse_flag(value: &str) -> Result<Option<bool>, FlagError> {
    let clean = value.trim().to_lowercase();
    match clean.as_str() {
        "" => Ok(None),
        "true" => Ok(Some(true)),
        "false" => Ok(Some(false)),
        _ => Err(FlagError(value.to_string())),
    }
}
