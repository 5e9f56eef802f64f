use std::io::{Read, Write};

use bytes::Bytes;
use tracing::trace;
use wireform_schema::Schema;

use crate::error::Result;
use crate::structure::Structure;

/// How the dump algorithm treats a slot holding no explicit value.
///
/// The split is deliberate and observable at the field boundary: mutable
/// structures delegate unset slots to the field's own default-write path,
/// while tuple structures pass the empty sentinel straight through the
/// value-based path and let the field accept or reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnsetPolicy {
    /// Delegate to [`Field::encode_default`](wireform_schema::Field::encode_default).
    FieldDefault,
    /// Pass `None` through [`Field::encode`](wireform_schema::Field::encode).
    PassSentinel,
}

/// The single dump algorithm both realizations share.
///
/// Walks the schema in declaration order, one field per slot, and aborts at
/// the first failing field.
pub(crate) fn dump_slots<V>(
    schema: &Schema<V>,
    slots: &[Option<V>],
    policy: UnsetPolicy,
    dst: &mut dyn Write,
) -> Result<()> {
    trace!(schema = %schema.name(), "dumping record");
    for (slot, (_, field)) in slots.iter().zip(schema.fields()) {
        match (slot, policy) {
            (Some(value), _) => field.encode(dst, Some(value))?,
            (None, UnsetPolicy::FieldDefault) => field.encode_default(dst)?,
            (None, UnsetPolicy::PassSentinel) => field.encode(dst, None)?,
        }
    }
    Ok(())
}

/// Decode one slot per field in schema order. The first decode failure
/// aborts; no partial slot vector escapes.
pub(crate) fn load_slots<V>(schema: &Schema<V>, src: &mut dyn Read) -> Result<Vec<Option<V>>> {
    trace!(schema = %schema.name(), "loading record");
    let mut slots = Vec::with_capacity(schema.len());
    for (_, field) in schema.fields() {
        slots.push(Some(field.decode(src)?));
    }
    Ok(slots)
}

/// Schema-driven call convention for the marshal engine.
///
/// `schema.dump(&instance, dst)` and `instance.dump(dst)` execute identical
/// logic; this trait provides the former as thin wrappers over the latter,
/// plus schema-level loading and default construction.
pub trait SchemaMarshal<V> {
    /// Decode a new [`Structure`] from a stream.
    fn load<R: Read>(&self, src: &mut R) -> Result<Structure<V>>;

    /// Decode a new [`Structure`] from an in-memory byte sequence.
    fn loads(&self, bytes: impl AsRef<[u8]>) -> Result<Structure<V>>;

    /// Encode an instance to a stream.
    fn dump<W: Write>(&self, instance: &Structure<V>, dst: &mut W) -> Result<()>;

    /// Encode an instance into a fresh buffer.
    fn dumps(&self, instance: &Structure<V>) -> Result<Bytes>;

    /// A new instance with every field set to its default, or an error
    /// naming this schema when any field lacks one.
    fn default_instance(&self) -> Result<Structure<V>>;
}

impl<V> SchemaMarshal<V> for Schema<V> {
    fn load<R: Read>(&self, src: &mut R) -> Result<Structure<V>> {
        Structure::load(self, src)
    }

    fn loads(&self, bytes: impl AsRef<[u8]>) -> Result<Structure<V>> {
        Structure::loads(self, bytes)
    }

    fn dump<W: Write>(&self, instance: &Structure<V>, dst: &mut W) -> Result<()> {
        instance.dump(dst)
    }

    fn dumps(&self, instance: &Structure<V>) -> Result<Bytes> {
        instance.dumps()
    }

    fn default_instance(&self) -> Result<Structure<V>> {
        Structure::default_instance(self)
    }
}
