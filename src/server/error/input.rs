use thiserror::Error;

/// Malformed or invalid client input.
///
/// Every variant results in a 400 Bad Request whose body carries the variant's
/// message, so messages are written for API clients.
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    /// Request body or query string could not be decoded.
    #[error("{0}")]
    Malformed(String),

    /// The `page` query parameter is not a non-negative integer.
    #[error("\"page\" should be a positive integer")]
    InvalidPage,

    /// The `ordering` query parameter is not a field name with an optional `-`.
    #[error("\"ordering\" should be a field name with an optional leading \"-\", got '{0}'")]
    InvalidOrdering(String),

    /// An identifier is not a 24 character hex encoded ObjectId.
    #[error("ObjectIDs must be exactly 12 bytes long")]
    InvalidObjectId,

    /// A required text field is missing or blank.
    #[error("\"{0}\" must not be empty")]
    EmptyField(&'static str),

    /// Rating outside of the inclusive 0 to 10 range.
    #[error("\"rating\" must be between 0 and 10, got {0}")]
    RatingOutOfRange(f64),

    /// City name matching a known misspelling.
    #[error("Unknown city '{given}', did you mean '{expected}'?")]
    UnknownCity {
        /// The city as submitted
        given: String,
        /// The normalized city name
        expected: &'static str,
    },

    /// Dish price below zero.
    #[error("\"price\" must not be negative, got {0}")]
    NegativePrice(i64),

    /// Update request without any field to change.
    #[error("Update must set at least one of \"name\", \"city\" or \"rating\"")]
    EmptyChange,
}
