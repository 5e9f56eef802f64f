//! Declarative schemas for binary wire structures.
//!
//! Declare named, ordered fields whose types implement the [`Field`] codec
//! contract, then dump instances to a byte stream and load them back. Wire
//! order always equals declaration order.
//!
//! Schema definition is a three-stage pipeline: an [`OrderedNamespace`]
//! captures fields in declaration order and tells each one its name, the
//! schema build asks every field to register itself into an immutable
//! ordered map, and instances ([`Structure`] or [`TupleStructure`]) drive
//! the field codecs sequentially in schema order.
//!
//! Concrete field codecs live in your code — the core only defines the
//! contract:
//!
//! ```
//! use std::io::{Read, Write};
//! use std::sync::Arc;
//!
//! use wireform::{
//!     Field, FieldError, FieldWidth, OrderedNamespace, Schema, SchemaBuilder,
//!     SchemaMarshal, Structure,
//! };
//!
//! /// Two-byte little-endian unsigned field.
//! struct U16Le {
//!     name: Option<String>,
//!     default: Option<u64>,
//! }
//!
//! impl Field<u64> for U16Le {
//!     fn set_name(&mut self, name: &str) -> Result<(), FieldError> {
//!         self.name = Some(name.to_string());
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> Option<&str> {
//!         self.name.as_deref()
//!     }
//!
//!     fn register(self: Arc<Self>, schema: &mut SchemaBuilder<u64>) -> Result<(), FieldError> {
//!         let name = self.name().ok_or(FieldError::Unnamed)?.to_string();
//!         schema.bind(name, self);
//!         Ok(())
//!     }
//!
//!     fn decode(&self, src: &mut dyn Read) -> Result<u64, FieldError> {
//!         let mut buf = [0u8; 2];
//!         src.read_exact(&mut buf)?;
//!         Ok(u64::from(u16::from_le_bytes(buf)))
//!     }
//!
//!     fn encode(&self, dst: &mut dyn Write, value: Option<&u64>) -> Result<(), FieldError> {
//!         let value = value.copied().unwrap_or(0);
//!         dst.write_all(&(value as u16).to_le_bytes())?;
//!         Ok(())
//!     }
//!
//!     fn width(&self) -> FieldWidth {
//!         FieldWidth::Fixed(2)
//!     }
//!
//!     fn default_value(&self) -> Option<u64> {
//!         self.default
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut ns = OrderedNamespace::new();
//!     ns.insert("kind", U16Le { name: None, default: Some(0) })?;
//!     ns.insert("flags", U16Le { name: None, default: None })?;
//!     let schema = Schema::from_namespace("Header", ns)?;
//!
//!     let mut header = Structure::new(&schema);
//!     header.set("kind", 7)?;
//!     header.set("flags", 1)?;
//!
//!     let bytes = header.dumps()?;
//!     let back = schema.loads(&bytes)?;
//!     assert_eq!(back, header);
//!     Ok(())
//! }
//! ```

pub use wireform_record::{RecordError, SchemaMarshal, Structure, TupleStructure};
pub use wireform_schema::{
    Entry, Field, FieldError, FieldWidth, OrderedNamespace, Schema, SchemaBuilder, SchemaError,
};
