use std::fmt;
use std::io::Write;

use bytes::Bytes;
use wireform_schema::Schema;

use crate::error::{RecordError, Result};
use crate::marshal::{dump_slots, UnsetPolicy};

/// Immutable, fixed-shape realization of a schema.
///
/// Exactly one slot per schema field, all populated at construction — with
/// the supplied value or an explicit empty sentinel. There is no mutating
/// API: immutability is enforced by the type system.
///
/// Unlike [`Structure`](crate::Structure), dumping never falls back to
/// field defaults: every slot, sentinel included, goes through the field's
/// value-based encode path, and the field itself accepts or rejects the
/// sentinel.
pub struct TupleStructure<V> {
    schema: Schema<V>,
    slots: Box<[Option<V>]>,
}

impl<V> TupleStructure<V> {
    /// Build a tuple instance over `schema`.
    ///
    /// Slots are populated in schema order from the supplied values; fields
    /// not named get the empty sentinel. Names outside the schema are
    /// rejected.
    pub fn new<S, I>(schema: &Schema<V>, values: I) -> Result<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, V)>,
    {
        let mut slots: Vec<Option<V>> = (0..schema.len()).map(|_| None).collect();
        for (name, value) in values {
            let at = schema
                .index_of(name.as_ref())
                .ok_or_else(|| RecordError::UnknownField {
                    schema: schema.name().to_string(),
                    name: name.as_ref().to_string(),
                })?;
            slots[at] = Some(value);
        }
        Ok(Self {
            schema: schema.clone(),
            slots: slots.into_boxed_slice(),
        })
    }

    /// The value held for `name`, or `None` for the sentinel.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.schema
            .index_of(name)
            .and_then(|at| self.slots[at].as_ref())
    }

    /// The value at declaration-order position `index`, or `None` for the
    /// sentinel or an out-of-range index.
    pub fn slot(&self, index: usize) -> Option<&V> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Number of slots — always the schema's field count.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The schema this instance was created from.
    pub fn schema(&self) -> &Schema<V> {
        &self.schema
    }

    /// Encode this instance to a stream.
    ///
    /// Every slot takes the value-based encode path; the sentinel is passed
    /// through as-is with no default fallback.
    pub fn dump<W: Write>(&self, dst: &mut W) -> Result<()> {
        dump_slots(&self.schema, &self.slots, UnsetPolicy::PassSentinel, dst)
    }

    /// Encode this instance into a fresh buffer.
    pub fn dumps(&self) -> Result<Bytes> {
        let mut buf = Vec::new();
        self.dump(&mut buf)?;
        Ok(Bytes::from(buf))
    }
}

impl<V> fmt::Debug for TupleStructure<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: <binary data>>", self.schema.name())
    }
}

impl<V: PartialEq> PartialEq for TupleStructure<V> {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema && self.slots == other.slots
    }
}

impl<V: Eq> Eq for TupleStructure<V> {}
