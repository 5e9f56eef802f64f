//! Ordered field registries and the field codec contract for wireform.
//!
//! A schema is an immutable, ordered name→field map built exactly once from
//! an [`OrderedNamespace`] that captures fields in declaration order. Wire
//! order always equals declaration order.
//!
//! Field codecs live outside this crate — anything implementing [`Field`]
//! can occupy a schema slot. This crate only defines the contract fields
//! must satisfy and the machinery that registers them.

pub mod error;
pub mod field;
pub mod namespace;
pub mod schema;

pub use error::{FieldError, Result, SchemaError};
pub use field::{Field, FieldWidth};
pub use namespace::{Entry, OrderedNamespace};
pub use schema::{Schema, SchemaBuilder};
