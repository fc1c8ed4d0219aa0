//! Dubbo wire-protocol codec
//!
//! Translates between an in-memory RPC request/response model and the byte
//! layout of the Dubbo protocol: a fixed 16-byte header (magic, bit-packed
//! flags, status, message id, body length) followed by a body whose grammar
//! branches on the flags and status code. Payload values go through the
//! pluggable [`value::ValueCodec`] seam; the crate performs no I/O and
//! manages no connections.
//!
//! The codec is stateless and reentrant: every call works on caller-owned
//! buffers and domain objects, so independent frames may be processed
//! concurrently without synchronization.

pub mod buffer;
pub mod protocol;
pub mod value;

pub use buffer::{BufferError, ReadBuffer, WriteBuffer};
pub use protocol::{
    status, Argument, BrokenRequest, CodecError, DecodeMode, DubboCodec, Request, RequestHeader,
    Response, ResponseHeader, HEADER_LEN,
};
pub use value::{BincodeValues, Value, ValueCodec, ValueError};
