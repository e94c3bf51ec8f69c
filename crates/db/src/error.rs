/// Failures raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document store could not be reached or rejected the handshake.
    #[error("document store connection failed: {0}")]
    Connection(String),

    /// A query or mutation failed while executing.
    #[error("document store query failed: {0}")]
    Query(#[from] mongodb::error::Error),

    /// A record could not be converted to or from its stored form.
    #[error("record encoding failed: {0}")]
    Encoding(String),

    /// A record with the same key already exists in the collection.
    #[error("{collection} already contains a record with id {key}")]
    Duplicate {
        collection: &'static str,
        key: String,
    },

    /// An upsert completed without yielding the resulting record.
    #[error("{collection} upsert for id {key} returned no record")]
    MissingUpsert {
        collection: &'static str,
        key: String,
    },
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}
