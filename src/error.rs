/// Errors raised by snapshot encoding, decoding, and field-name lookup.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A wire field name matched none of the known snapshot fields.
    ///
    /// This indicates a defect in the calling dispatch table rather than
    /// bad runtime data; fix the mapping or the caller.
    #[error("invalid field: {0:?}")]
    InvalidField(String),

    /// An exception snapshot failed to serialize to JSON.
    #[error("serializing exception snapshot failed with {0}")]
    SerializeSnapshot(serde_json::Error),

    /// An exception snapshot failed to deserialize from JSON.
    #[error("deserializing exception snapshot failed with {0}")]
    DeserializeSnapshot(serde_json::Error),
}
