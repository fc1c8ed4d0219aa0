//! Payload value model and the value-codec seam
//!
//! The framing codec treats every variable-length body field as an opaque
//! value handled by a [`ValueCodec`]. The default implementation serializes
//! the dynamic [`Value`] model with bincode; a Hessian2 codec can be slotted
//! in behind the same trait without touching the framing logic.

mod descriptor;

pub use descriptor::{descriptor_of, slots_from_descriptor};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io;
use thiserror::Error;

use crate::buffer::{ReadBuffer, WriteBuffer};

/// Value codec errors. Payload-local: the frame decoders absorb these into
/// the domain objects instead of propagating them.
#[derive(Error, Debug)]
pub enum ValueError {
    #[error("truncated value")]
    Truncated,

    #[error("malformed value: {0}")]
    Malformed(String),

    #[error("expected {expected} value, got {actual}")]
    UnexpectedType {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Dynamic payload value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

/// Serializes and deserializes individual payload values.
///
/// Implementations must be self-delimiting on read: consecutive values
/// decode from one body stream without length prefixes between them.
pub trait ValueCodec {
    fn write_value(&self, buf: &mut WriteBuffer, value: &Value) -> Result<(), ValueError>;

    fn read_value(&self, buf: &mut ReadBuffer) -> Result<Value, ValueError>;

    /// Read one value expected to be a string.
    fn read_string(&self, buf: &mut ReadBuffer) -> Result<String, ValueError> {
        match self.read_value(buf)? {
            Value::String(s) => Ok(s),
            other => Err(ValueError::UnexpectedType {
                expected: "string",
                actual: other.type_name(),
            }),
        }
    }

    /// Read one value expected to be a string-keyed, string-valued map.
    fn read_string_map(&self, buf: &mut ReadBuffer) -> Result<HashMap<String, String>, ValueError> {
        match self.read_value(buf)? {
            Value::Map(map) => map
                .into_iter()
                .map(|(key, value)| match value {
                    Value::String(s) => Ok((key, s)),
                    other => Err(ValueError::UnexpectedType {
                        expected: "string",
                        actual: other.type_name(),
                    }),
                })
                .collect(),
            other => Err(ValueError::UnexpectedType {
                expected: "map",
                actual: other.type_name(),
            }),
        }
    }
}

/// Default value codec: bincode over the serde `Value` derives.
#[derive(Debug, Default, Clone, Copy)]
pub struct BincodeValues;

impl ValueCodec for BincodeValues {
    fn write_value(&self, buf: &mut WriteBuffer, value: &Value) -> Result<(), ValueError> {
        bincode::serialize_into(buf, value).map_err(|e| ValueError::Malformed(e.to_string()))
    }

    fn read_value(&self, buf: &mut ReadBuffer) -> Result<Value, ValueError> {
        bincode::deserialize_from(buf).map_err(|e| match *e {
            bincode::ErrorKind::Io(ref err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                ValueError::Truncated
            }
            _ => ValueError::Malformed(e.to_string()),
        })
    }
}
