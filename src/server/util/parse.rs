use bson::oid::ObjectId;

use crate::server::error::input::InputError;

/// Parses a hex encoded ObjectId from a path or query value.
///
/// # Arguments
/// - `value` - The string to parse, expected to be 24 hex characters (12 bytes)
///
/// # Returns
/// - `Ok(ObjectId)` - Successfully parsed identifier
/// - `Err(InputError::InvalidObjectId)` - Wrong length or non-hex characters
pub fn parse_object_id(value: &str) -> Result<ObjectId, InputError> {
    ObjectId::parse_str(value).map_err(|_| InputError::InvalidObjectId)
}

/// Parses the optional `page` query parameter.
///
/// # Returns
/// - `Ok(0)` - Parameter absent or blank, meaning no pagination
/// - `Ok(page)` - Parsed page number
/// - `Err(InputError::InvalidPage)` - Present but not a non-negative integer
pub fn parse_page(value: Option<&str>) -> Result<u64, InputError> {
    match value.map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => value.parse::<u64>().map_err(|_| InputError::InvalidPage),
    }
}

/// Validates the optional `ordering` query parameter.
///
/// Accepts a field name made of ASCII letters, digits, `_` and `.`, optionally
/// prefixed with `-` for descending order.
///
/// # Returns
/// - `Ok(None)` - Parameter absent or blank
/// - `Ok(Some(ordering))` - Valid ordering key, trimmed
/// - `Err(InputError::InvalidOrdering)` - Anything else
pub fn parse_ordering(value: Option<&str>) -> Result<Option<String>, InputError> {
    let Some(ordering) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    let field = ordering.strip_prefix('-').unwrap_or(ordering);
    let valid = !field.is_empty()
        && !field.starts_with('$')
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');

    if !valid {
        return Err(InputError::InvalidOrdering(ordering.to_string()));
    }

    Ok(Some(ordering.to_string()))
}
