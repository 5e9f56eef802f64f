use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Result, SchemaError};
use crate::field::Field;

/// One captured namespace entry: a schema field, or an arbitrary member
/// that happens to share the declaration (a constant, a helper — anything).
pub enum Entry<V> {
    Field(Arc<dyn Field<V>>),
    Member(Box<dyn Any>),
}

/// Ordered, name-aware container populated in declaration order.
///
/// This is the capture stage of schema definition: user code inserts each
/// field under its declared name, in source order, and the namespace tells
/// the field its name immediately. Non-field members coexist without error
/// and are skipped when the schema is built.
pub struct OrderedNamespace<V> {
    entries: Vec<(String, Entry<V>)>,
    index: HashMap<String, usize>,
}

impl<V> OrderedNamespace<V> {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert a field under `name`, invoking its naming hook synchronously.
    ///
    /// A hook failure propagates unmodified and the field is not stored.
    /// Inserting under an existing key replaces the stored entry but keeps
    /// its original position.
    pub fn insert(&mut self, name: impl Into<String>, mut field: impl Field<V> + 'static) -> Result<()> {
        let name = name.into();
        field.set_name(&name).map_err(|source| SchemaError::Naming {
            field: name.clone(),
            source,
        })?;
        self.store(name, Entry::Field(Arc::new(field)));
        Ok(())
    }

    /// Insert a non-field member under `name`, stored unchanged. No naming
    /// hook is involved.
    pub fn insert_member(&mut self, name: impl Into<String>, member: impl Any) {
        self.store(name.into(), Entry::Member(Box::new(member)));
    }

    fn store(&mut self, name: String, entry: Entry<V>) {
        match self.index.get(&name) {
            Some(&at) => self.entries[at].1 = entry,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, entry));
            }
        }
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&Entry<V>> {
        self.index.get(name).map(|&at| &self.entries[at].1)
    }

    /// Look up a field by name. `None` for missing names and non-field members.
    pub fn field(&self, name: &str) -> Option<&Arc<dyn Field<V>>> {
        match self.get(name) {
            Some(Entry::Field(field)) => Some(field),
            _ => None,
        }
    }

    /// Look up a non-field member by name.
    pub fn member(&self, name: &str) -> Option<&dyn Any> {
        match self.get(name) {
            Some(Entry::Member(member)) => Some(member.as_ref()),
            _ => None,
        }
    }

    /// Number of entries, fields and members alike.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the namespace holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry<V>)> + '_ {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub(crate) fn into_entries(self) -> Vec<(String, Entry<V>)> {
        self.entries
    }
}

impl<V> Default for OrderedNamespace<V> {
    fn default() -> Self {
        Self::new()
    }
}
