use std::fmt;
use std::io::{Cursor, Read, Write};

use bytes::Bytes;
use wireform_schema::Schema;

use crate::error::{RecordError, Result};
use crate::marshal::{dump_slots, load_slots, UnsetPolicy};

/// Mutable, general-purpose realization of a schema.
///
/// Holds one slot per schema field in declaration order. A slot is either
/// explicitly set or unset — "unset" is distinct from "set to zero". Plain
/// construction and [`set`](Structure::set) assign values directly,
/// bypassing field codecs entirely; codecs run only during
/// [`load`](Structure::load), [`dump`](Structure::dump), and
/// [`default_instance`](Structure::default_instance).
#[derive(Clone)]
pub struct Structure<V> {
    schema: Schema<V>,
    slots: Vec<Option<V>>,
}

impl<V> Structure<V> {
    /// A new instance with every field unset.
    pub fn new(schema: &Schema<V>) -> Self {
        Self {
            schema: schema.clone(),
            slots: (0..schema.len()).map(|_| None).collect(),
        }
    }

    /// A new instance with the given fields explicitly set.
    pub fn with_values<S, I>(schema: &Schema<V>, values: I) -> Result<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, V)>,
    {
        let mut instance = Self::new(schema);
        for (name, value) in values {
            instance.set(name.as_ref(), value)?;
        }
        Ok(instance)
    }

    /// Explicitly assign a field. The value is stored as-is; no codec runs.
    pub fn set(&mut self, name: &str, value: V) -> Result<()> {
        let at = self.slot_index(name)?;
        self.slots[at] = Some(value);
        Ok(())
    }

    /// The explicit value assigned to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.schema
            .index_of(name)
            .and_then(|at| self.slots[at].as_ref())
    }

    /// Whether `name` has an explicit assignment.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Return a field to the unset state, yielding any explicit value.
    pub fn unset(&mut self, name: &str) -> Result<Option<V>> {
        let at = self.slot_index(name)?;
        Ok(self.slots[at].take())
    }

    /// The schema this instance was created from.
    pub fn schema(&self) -> &Schema<V> {
        &self.schema
    }

    /// Decode a new instance from a stream.
    ///
    /// Each field decodes one value in schema order and is assigned
    /// explicitly. The first decode failure aborts — no partial instance
    /// is returned.
    pub fn load<R: Read>(schema: &Schema<V>, src: &mut R) -> Result<Self> {
        Ok(Self {
            schema: schema.clone(),
            slots: load_slots(schema, src)?,
        })
    }

    /// Decode a new instance from an in-memory byte sequence.
    pub fn loads(schema: &Schema<V>, bytes: impl AsRef<[u8]>) -> Result<Self> {
        let mut src = Cursor::new(bytes.as_ref());
        Self::load(schema, &mut src)
    }

    /// Encode this instance to a stream.
    ///
    /// Explicitly set fields take the value-based encode path; unset fields
    /// delegate to the field's own default-write path, which fails when the
    /// field has no usable default.
    pub fn dump<W: Write>(&self, dst: &mut W) -> Result<()> {
        dump_slots(&self.schema, &self.slots, UnsetPolicy::FieldDefault, dst)
    }

    /// Encode this instance into a fresh buffer.
    pub fn dumps(&self) -> Result<Bytes> {
        let mut buf = Vec::new();
        self.dump(&mut buf)?;
        Ok(Bytes::from(buf))
    }

    /// A new instance with every field explicitly set to its field default.
    ///
    /// Fails with an error naming the schema when any field lacks a default.
    pub fn default_instance(schema: &Schema<V>) -> Result<Self> {
        if !schema.has_default() {
            return Err(RecordError::NoDefault {
                schema: schema.name().to_string(),
            });
        }
        Ok(Self {
            schema: schema.clone(),
            slots: schema.fields().map(|(_, field)| field.default_value()).collect(),
        })
    }

    fn slot_index(&self, name: &str) -> Result<usize> {
        self.schema
            .index_of(name)
            .ok_or_else(|| RecordError::UnknownField {
                schema: self.schema.name().to_string(),
                name: name.to_string(),
            })
    }
}

/// Opaque on purpose: instances render a placeholder, not field values.
impl<V> fmt::Debug for Structure<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: <binary data>>", self.schema.name())
    }
}

impl<V: PartialEq> PartialEq for Structure<V> {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema && self.slots == other.slots
    }
}

impl<V: Eq> Eq for Structure<V> {}
