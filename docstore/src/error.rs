use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// No document matched the filter of an update, remove or `one` query.
    #[error("No document matched the filter")]
    NotFound,

    /// Failure reported by the MongoDB driver (connection, timeout, write error, ...).
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),

    /// A value could not be encoded as a BSON document.
    #[error("Failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),

    /// A stored document did not match the expected shape.
    #[error("Failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),

    /// Failure reported by a non-driver backend.
    #[error("{0}")]
    Backend(String),
}
