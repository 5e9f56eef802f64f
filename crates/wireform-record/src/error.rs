use wireform_schema::FieldError;

/// Errors that can occur while constructing or marshaling instances.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// A default instance was requested but not every field has a default.
    #[error("no default available for {schema} structures")]
    NoDefault { schema: String },

    /// A name outside the schema's field map was used.
    #[error("unknown field {name:?} for schema {schema}")]
    UnknownField { schema: String, name: String },

    /// A field codec failed; the failure surfaces verbatim.
    #[error(transparent)]
    Field(#[from] FieldError),
}

pub type Result<T> = std::result::Result<T, RecordError>;
