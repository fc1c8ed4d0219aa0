//! Request and response domain objects
//!
//! Plain value structs: built by the caller before encoding, or populated
//! field-by-field by a decoder and handed back. The codec never keeps a
//! reference to them past the call that received it.

use std::collections::HashMap;

use crate::value::Value;

/// Response status byte values.
pub mod status {
    pub const OK: u8 = 0;
    pub const CLIENT_TIMEOUT: u8 = 30;
    pub const SERVER_TIMEOUT: u8 = 31;
    pub const BAD_REQUEST: u8 = 40;
    pub const BAD_RESPONSE: u8 = 50;
    pub const SERVICE_NOT_FOUND: u8 = 60;
    pub const SERVICE_ERROR: u8 = 70;
    pub const SERVER_ERROR: u8 = 80;
    pub const CLIENT_ERROR: u8 = 90;
}

/// One call argument: a Java type descriptor fragment plus its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    /// Declared Java type, e.g. `Ljava/lang/String;` or `I`.
    pub java_type: String,
    pub value: Value,
}

impl Argument {
    pub fn new(java_type: impl Into<String>, value: Value) -> Self {
        Self {
            java_type: java_type.into(),
            value,
        }
    }
}

/// An RPC request frame in its in-memory form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    /// Message id, unique per in-flight call.
    pub id: i64,
    /// Interface version (mirrors the `version` attachment).
    pub version: String,
    /// The caller expects a response.
    pub two_way: bool,
    pub heartbeat: bool,
    pub event: bool,
    pub method: String,
    /// Ordered argument list.
    pub arguments: Vec<Argument>,
    /// Protocol metadata and caller-supplied key/values.
    pub attachments: HashMap<String, String>,
    /// Decoded heartbeat/event payload, if any.
    pub payload: Option<Value>,
}

impl Request {
    /// Attachment lookup with a default for absent keys.
    pub fn attachment<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.attachments.get(key).map(String::as_str).unwrap_or(default)
    }
}

/// An RPC response frame in its in-memory form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// Message id of the call being answered.
    pub id: i64,
    /// One of the [`status`] byte values.
    pub status: u8,
    pub heartbeat: bool,
    /// Result value. Mutually exclusive with `exception`.
    pub value: Option<Value>,
    /// Structured exception payload produced by the callee.
    pub exception: Option<Value>,
    /// Human-readable error when status is not OK and no structured
    /// exception was produced.
    pub error_msg: String,
}

impl Response {
    pub fn is_ok(&self) -> bool {
        self.status == status::OK
    }
}
