//! Marshal/unmarshal engine and instance realizations for wireform schemas.
//!
//! Two realizations share one schema and one dump algorithm:
//! - [`Structure`] — mutable, general-purpose; unset slots fall back to the
//!   field's own default-write path during dump.
//! - [`TupleStructure`] — immutable, fixed-shape; every slot goes through
//!   the value-based encode path, empty sentinel included, with no default
//!   fallback.
//!
//! Wire order equals schema order, always. Failures abort at the first
//! failing field — no partial instances, no partial-success mode.

pub mod error;
pub mod marshal;
pub mod structure;
pub mod tuple;

#[cfg(test)]
pub(crate) mod testfield;

pub use error::{RecordError, Result};
pub use marshal::SchemaMarshal;
pub use structure::Structure;
pub use tuple::TupleStructure;
