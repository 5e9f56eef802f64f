use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, SchemaError};
use crate::field::Field;
use crate::namespace::{Entry, OrderedNamespace};

/// Mutable staging area handed to fields during self-registration.
///
/// Fields bind themselves here, under their own chosen name(s), in the
/// order the namespace captured them. [`build`](SchemaBuilder::build) seals
/// the result into an immutable [`Schema`].
pub struct SchemaBuilder<V> {
    name: String,
    fields: Vec<(String, Arc<dyn Field<V>>)>,
    index: HashMap<String, usize>,
}

impl<V> SchemaBuilder<V> {
    /// Create an empty builder for a schema called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The name of the schema under construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bind a field under `name`, preserving bind order. Binding an
    /// existing name replaces the field but keeps its original position.
    pub fn bind(&mut self, name: impl Into<String>, field: Arc<dyn Field<V>>) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&at) => self.fields[at].1 = field,
            None => {
                self.index.insert(name.clone(), self.fields.len());
                self.fields.push((name, field));
            }
        }
    }

    /// Seal the builder into an immutable schema.
    pub fn build(self) -> Schema<V> {
        debug!(schema = %self.name, fields = self.fields.len(), "schema built");
        Schema {
            inner: Arc::new(SchemaInner {
                name: self.name,
                fields: self.fields,
                index: self.index,
            }),
        }
    }
}

/// An immutable, ordered name→field map for one structure type.
///
/// Built exactly once, then shared read-only by every instance. Iteration
/// order is authoritative: it equals declaration order, and dump/load
/// always walk it start to finish. Cloning is cheap (shared internals).
pub struct Schema<V> {
    inner: Arc<SchemaInner<V>>,
}

struct SchemaInner<V> {
    name: String,
    fields: Vec<(String, Arc<dyn Field<V>>)>,
    index: HashMap<String, usize>,
}

impl<V> Schema<V> {
    /// Build a schema from a captured namespace.
    ///
    /// Every field entry is asked to register itself, in capture order;
    /// non-field members are skipped. The first registration failure aborts
    /// the whole build — no partially built schema is ever returned.
    pub fn from_namespace(name: impl Into<String>, namespace: OrderedNamespace<V>) -> Result<Self> {
        let name = name.into();
        let mut builder = SchemaBuilder::new(name.clone());

        for (_, entry) in namespace.into_entries() {
            if let Entry::Field(field) = entry {
                field
                    .register(&mut builder)
                    .map_err(|source| SchemaError::Registration {
                        schema: name.clone(),
                        source,
                    })?;
            }
        }

        Ok(builder.build())
    }

    /// The schema's name, used in error messages.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.inner.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.inner.fields.is_empty()
    }

    /// Iterate `(name, field)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Arc<dyn Field<V>>)> + '_ {
        self.inner
            .fields
            .iter()
            .map(|(name, field)| (name.as_str(), field))
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Arc<dyn Field<V>>> {
        self.index_of(name).map(|at| &self.inner.fields[at].1)
    }

    /// The declaration-order position of `name`, if registered.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.inner.index.get(name).copied()
    }

    /// Sum of declared fixed field widths, in bytes.
    ///
    /// Variable-width fields contribute zero. Informational only — never
    /// checked against what codecs actually read or write.
    pub fn declared_size(&self) -> usize {
        self.fields()
            .map(|(_, field)| field.width().fixed().unwrap_or(0))
            .sum()
    }

    /// Whether every field reports a default value.
    pub fn has_default(&self) -> bool {
        self.fields().all(|(_, field)| field.has_default())
    }
}

impl<V> Clone for Schema<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Identity comparison: two handles are equal iff they share one built map.
impl<V> PartialEq for Schema<V> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<V> Eq for Schema<V> {}

impl<V> fmt::Debug for Schema<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.inner.name)
            .field(
                "fields",
                &self
                    .inner
                    .fields
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
