use std::io::{Read, Write};
use std::sync::Arc;

use crate::error::FieldError;
use crate::schema::SchemaBuilder;

/// Declared byte size of one field on the wire.
///
/// Informational only — the core sums fixed widths for
/// [`Schema::declared_size`](crate::Schema::declared_size) but never
/// enforces them against what a codec actually reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    /// Exactly this many bytes, every time. Zero is allowed.
    Fixed(usize),
    /// The field decides per value (length-prefixed data and the like).
    Variable,
}

impl FieldWidth {
    /// The fixed byte count, or `None` for variable-width fields.
    pub fn fixed(self) -> Option<usize> {
        match self {
            FieldWidth::Fixed(n) => Some(n),
            FieldWidth::Variable => None,
        }
    }
}

/// The capability contract every schema slot must satisfy.
///
/// Implementations are external collaborators: the core drives them in
/// schema order during load and dump but never interprets the bytes they
/// produce. `V` is the schema-wide value type fields decode to and encode
/// from.
///
/// Lifecycle: a field is constructed by user code, told its name exactly
/// once when inserted into an [`OrderedNamespace`](crate::OrderedNamespace),
/// registers itself into the schema at build time, and is shared read-only
/// by every instance of that schema afterwards.
pub trait Field<V> {
    /// Naming hook, invoked synchronously with the namespace key at
    /// insertion time. A field's name is bound exactly once; failures
    /// propagate unmodified to the inserter.
    fn set_name(&mut self, name: &str) -> Result<(), FieldError>;

    /// The name assigned by [`set_name`](Field::set_name), or `None` before
    /// the hook has run.
    fn name(&self) -> Option<&str>;

    /// Insert this field into the schema under its own chosen name(s).
    ///
    /// Most fields bind exactly one entry — themselves, under their assigned
    /// name. Composite fields may bind several sub-entries, in their own
    /// order. Any error aborts the schema build entirely.
    fn register(self: Arc<Self>, schema: &mut SchemaBuilder<V>) -> Result<(), FieldError>;

    /// Decode one value from the stream. Fails on malformed or short input.
    fn decode(&self, src: &mut dyn Read) -> Result<V, FieldError>;

    /// Encode through the value-based path.
    ///
    /// `None` is the explicit empty sentinel produced by tuple structures;
    /// the field must accept or reject it itself — no default fallback
    /// happens on this path.
    fn encode(&self, dst: &mut dyn Write, value: Option<&V>) -> Result<(), FieldError>;

    /// Declared wire width of this field.
    fn width(&self) -> FieldWidth;

    /// The field's default value, if it has one.
    fn default_value(&self) -> Option<V>;

    /// Whether [`default_value`](Field::default_value) yields anything.
    fn has_default(&self) -> bool {
        self.default_value().is_some()
    }

    /// Encode through the no-value path, used by mutable structures for
    /// unset slots. Writes the field default, or fails when there is none.
    fn encode_default(&self, dst: &mut dyn Write) -> Result<(), FieldError> {
        match self.default_value() {
            Some(value) => self.encode(dst, Some(&value)),
            None => Err(FieldError::NoDefault {
                field: self.name().unwrap_or_default().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ByteProbe {
        name: Option<String>,
        default: Option<u64>,
    }

    impl Field<u64> for ByteProbe {
        fn set_name(&mut self, name: &str) -> Result<(), FieldError> {
            self.name = Some(name.to_string());
            Ok(())
        }

        fn name(&self) -> Option<&str> {
            self.name.as_deref()
        }

        fn register(self: Arc<Self>, schema: &mut SchemaBuilder<u64>) -> Result<(), FieldError> {
            let name = self.name().ok_or(FieldError::Unnamed)?.to_string();
            schema.bind(name, self);
            Ok(())
        }

        fn decode(&self, src: &mut dyn Read) -> Result<u64, FieldError> {
            let mut buf = [0u8; 1];
            src.read_exact(&mut buf)?;
            Ok(u64::from(buf[0]))
        }

        fn encode(&self, dst: &mut dyn Write, value: Option<&u64>) -> Result<(), FieldError> {
            let value = *value.ok_or_else(|| FieldError::Encode {
                field: self.name.clone().unwrap_or_default(),
                reason: "value required".to_string(),
            })?;
            dst.write_all(&[value as u8])?;
            Ok(())
        }

        fn width(&self) -> FieldWidth {
            FieldWidth::Fixed(1)
        }

        fn default_value(&self) -> Option<u64> {
            self.default
        }
    }

    #[test]
    fn fixed_width_accessor() {
        assert_eq!(FieldWidth::Fixed(4).fixed(), Some(4));
        assert_eq!(FieldWidth::Fixed(0).fixed(), Some(0));
        assert_eq!(FieldWidth::Variable.fixed(), None);
    }

    #[test]
    fn has_default_tracks_default_value() {
        let with = ByteProbe {
            name: None,
            default: Some(7),
        };
        let without = ByteProbe {
            name: None,
            default: None,
        };

        assert!(with.has_default());
        assert!(!without.has_default());
    }

    #[test]
    fn encode_default_writes_the_default() {
        let field = ByteProbe {
            name: Some("tag".to_string()),
            default: Some(0x2A),
        };

        let mut out = Vec::new();
        field.encode_default(&mut out).unwrap();
        assert_eq!(out, [0x2A]);
    }

    #[test]
    fn encode_default_without_default_names_the_field() {
        let field = ByteProbe {
            name: Some("tag".to_string()),
            default: None,
        };

        let mut out = Vec::new();
        let err = field.encode_default(&mut out).unwrap_err();
        assert!(matches!(err, FieldError::NoDefault { field } if field == "tag"));
        assert!(out.is_empty());
    }
}
