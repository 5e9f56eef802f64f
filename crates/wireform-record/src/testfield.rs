//! Fixture field codecs shared by this crate's test modules.

use std::cell::Cell;
use std::io::{Read, Write};
use std::rc::Rc;
use std::sync::Arc;

use wireform_schema::{Field, FieldError, FieldWidth, OrderedNamespace, Schema, SchemaBuilder};

/// Fixed-width little-endian unsigned field. Rejects the empty sentinel,
/// so any `encode(None)` call surfaces as an error in tests.
pub(crate) struct UintField {
    name: Option<String>,
    width: usize,
    default: Option<u64>,
}

impl UintField {
    pub(crate) fn new(width: usize) -> Self {
        Self {
            name: None,
            width,
            default: None,
        }
    }

    pub(crate) fn with_default(width: usize, default: u64) -> Self {
        Self {
            name: None,
            width,
            default: Some(default),
        }
    }
}

impl Field<u64> for UintField {
    fn set_name(&mut self, name: &str) -> Result<(), FieldError> {
        if self.name.is_some() {
            return Err(FieldError::InvalidName {
                name: name.to_string(),
                reason: "name already bound".to_string(),
            });
        }
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
        let mut buf = vec![0u8; self.width];
        src.read_exact(&mut buf)?;
        let mut value = 0u64;
        for (i, byte) in buf.iter().enumerate() {
            value |= u64::from(*byte) << (8 * i);
        }
        Ok(value)
    }

    fn encode(&self, dst: &mut dyn Write, value: Option<&u64>) -> Result<(), FieldError> {
        let value = *value.ok_or_else(|| FieldError::Encode {
            field: self.name.clone().unwrap_or_default(),
            reason: "value required".to_string(),
        })?;
        let bytes: Vec<u8> = (0..self.width).map(|i| (value >> (8 * i)) as u8).collect();
        dst.write_all(&bytes)?;
        Ok(())
    }

    fn width(&self) -> FieldWidth {
        FieldWidth::Fixed(self.width)
    }

    fn default_value(&self) -> Option<u64> {
        self.default
    }
}

/// Per-path invocation counters for [`CountingField`].
#[derive(Default)]
pub(crate) struct PathCounters {
    pub(crate) value_calls: Cell<usize>,
    pub(crate) default_calls: Cell<usize>,
    pub(crate) sentinel_calls: Cell<usize>,
}

/// One-byte field that records which encode path the engine drove it
/// through. Accepts the empty sentinel by writing a zero byte.
pub(crate) struct CountingField {
    name: Option<String>,
    default: Option<u64>,
    counters: Rc<PathCounters>,
}

impl CountingField {
    pub(crate) fn new() -> (Self, Rc<PathCounters>) {
        let counters = Rc::new(PathCounters::default());
        (
            Self {
                name: None,
                default: None,
                counters: Rc::clone(&counters),
            },
            counters,
        )
    }

    pub(crate) fn with_default(default: u64) -> (Self, Rc<PathCounters>) {
        let counters = Rc::new(PathCounters::default());
        (
            Self {
                name: None,
                default: Some(default),
                counters: Rc::clone(&counters),
            },
            counters,
        )
    }
}

impl Field<u64> for CountingField {
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
        match value {
            Some(value) => {
                self.counters.value_calls.set(self.counters.value_calls.get() + 1);
                dst.write_all(&[*value as u8])?;
            }
            None => {
                self.counters
                    .sentinel_calls
                    .set(self.counters.sentinel_calls.get() + 1);
                dst.write_all(&[0])?;
            }
        }
        Ok(())
    }

    fn width(&self) -> FieldWidth {
        FieldWidth::Fixed(1)
    }

    fn default_value(&self) -> Option<u64> {
        self.default
    }

    fn encode_default(&self, dst: &mut dyn Write) -> Result<(), FieldError> {
        self.counters
            .default_calls
            .set(self.counters.default_calls.get() + 1);
        match self.default {
            Some(default) => {
                dst.write_all(&[default as u8])?;
                Ok(())
            }
            None => Err(FieldError::NoDefault {
                field: self.name.clone().unwrap_or_default(),
            }),
        }
    }
}

/// Two fixed-width fields, sizes 2 and 4, declared in that order.
pub(crate) fn packet_schema() -> Schema<u64> {
    let mut ns = OrderedNamespace::new();
    ns.insert("tag", UintField::new(2)).unwrap();
    ns.insert("length", UintField::new(4)).unwrap();
    Schema::from_namespace("Packet", ns).unwrap()
}

/// Two counting fields: `first` carries a default, `second` does not.
/// Returns the schema and both fields' counters.
pub(crate) fn counting_pair() -> (Schema<u64>, Rc<PathCounters>, Rc<PathCounters>) {
    let (first, first_counters) = CountingField::with_default(1);
    let (second, second_counters) = CountingField::new();

    let mut ns = OrderedNamespace::new();
    ns.insert("first", first).unwrap();
    ns.insert("second", second).unwrap();
    let schema = Schema::from_namespace("Counted", ns).unwrap();

    (schema, first_counters, second_counters)
}
