/// Errors a field implementation can raise.
///
/// This is the vocabulary the core speaks with external field codecs.
/// The core never recovers from any of these — every failure surfaces
/// verbatim to the immediate caller.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// The naming hook rejected the assigned name.
    #[error("invalid name {name:?} for field: {reason}")]
    InvalidName { name: String, reason: String },

    /// The field was asked to act before its naming hook ran.
    #[error("field has no assigned name")]
    Unnamed,

    /// Decoding failed on malformed input.
    #[error("failed to decode field {field:?}: {reason}")]
    Decode { field: String, reason: String },

    /// Encoding failed for the given value.
    #[error("failed to encode field {field:?}: {reason}")]
    Encode { field: String, reason: String },

    /// The field was asked to write without a value and has no default.
    #[error("no default available for field {field:?}")]
    NoDefault { field: String },

    /// The underlying stream failed.
    #[error("field I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while capturing fields or building a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A field's naming hook failed during namespace insertion.
    #[error("naming hook failed for field {field:?}: {source}")]
    Naming { field: String, source: FieldError },

    /// A field's self-registration failed; the schema build is aborted.
    #[error("registration failed while building schema {schema:?}: {source}")]
    Registration { schema: String, source: FieldError },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
