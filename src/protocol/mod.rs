//! Protocol module - Dubbo wire framing constants and codec
//!
//! Every frame is a fixed 16-byte header followed by a length-prefixed body:
//! - 2 bytes magic (0xDA 0xBB)
//! - 1 byte flags: bit7 request, bit6 two-way, bit5 event,
//!   bits 4-0 serialization id
//! - 1 byte status
//! - 8 bytes message id (big-endian)
//! - 4 bytes body length (big-endian)
//! - Variable length body, grammar driven by the flags and status

mod codec;
mod message;

pub use codec::*;
pub use message::*;

use crate::value::Value;

/// Fixed header length in bytes.
pub const HEADER_LEN: usize = 16;

/// Magic bytes identifying a Dubbo frame.
pub const MAGIC: [u8; 2] = [0xda, 0xbb];

/// Flag byte bit7: request (vs. response).
pub const FLAG_REQUEST: u8 = 0x80;
/// Flag byte bit6: the caller expects a response.
pub const FLAG_TWO_WAY: u8 = 0x40;
/// Flag byte bit5: event frame (heartbeat or other non-business payload).
pub const FLAG_EVENT: u8 = 0x20;
/// The low five bits of the flag byte carry the serialization id.
pub const SERIALIZATION_MASK: u8 = 0x1f;

/// The only accepted serialization id.
pub const HESSIAN2_SERIALIZATION_ID: u8 = 2;

/// Response body marker bytes preceding the result encoding. Fixed by the
/// protocol; they must match the counterpart implementation byte-for-byte.
pub const RESPONSE_WITH_EXCEPTION: u8 = 0;
pub const RESPONSE_VALUE: u8 = 1;
pub const RESPONSE_NULL_VALUE: u8 = 2;

/// Attachment key for the protocol version.
pub const DUBBO_VERSION_KEY: &str = "dubbo";
/// Attachment key for the service path.
pub const PATH_KEY: &str = "path";
/// Attachment key for the interface version.
pub const VERSION_KEY: &str = "version";

/// Protocol version written when the `dubbo` attachment is absent.
pub const DEFAULT_DUBBO_VERSION: &str = "2.0.0";
/// Interface version written when the `version` attachment is absent.
pub const DEFAULT_SERVICE_VERSION: &str = "0.0.0";

/// Sentinel pre-set as the response value while decoding a heartbeat body.
pub const HEARTBEAT_EVENT: Value = Value::Null;
