//! Dubbo frame codec
//!
//! Encodes and decodes the fixed 16-byte header and the flag/status-driven
//! body grammars. Decoding is two-phase: callers decode the header first
//! (buffering more input on `Ok(None)`), then hand exactly `body_len` bytes
//! to the matching body decoder. The codec is stateless; every call works on
//! caller-owned buffers and domain objects.

use thiserror::Error;
use tracing::{debug, warn};

use super::message::{status, Request, Response};
use super::{
    DEFAULT_DUBBO_VERSION, DEFAULT_SERVICE_VERSION, DUBBO_VERSION_KEY, FLAG_EVENT, FLAG_REQUEST,
    FLAG_TWO_WAY, HEADER_LEN, HEARTBEAT_EVENT, HESSIAN2_SERIALIZATION_ID, MAGIC, PATH_KEY,
    RESPONSE_NULL_VALUE, RESPONSE_VALUE, RESPONSE_WITH_EXCEPTION, SERIALIZATION_MASK, VERSION_KEY,
};
use crate::buffer::{ReadBuffer, WriteBuffer};
use crate::value::{descriptor_of, slots_from_descriptor, BincodeValues, Value, ValueCodec, ValueError};

/// Codec errors. Every variant is frame-fatal: the caller should drop or
/// re-frame the connection. Payload-local value failures are absorbed into
/// the domain objects instead (see [`DubboCodec::decode_response_body`] and
/// [`BrokenRequest`]).
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("invalid magic bytes")]
    InvalidMagic,

    #[error("unsupported serialization id: {0}")]
    InvalidSerialization(u8),

    #[error("request flag missing from header")]
    NotRequest,

    #[error("value codec error: {0}")]
    Value(#[from] ValueError),
}

/// Request body decode failure. Carries whatever was decoded before the
/// failing field; partial argument lists are not retained.
#[derive(Error, Debug)]
#[error("broken request: {reason}")]
pub struct BrokenRequest {
    pub partial: Request,
    pub reason: String,
}

/// Which request-body grammar to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    /// Normal call: an attachment map follows the arguments.
    Standard,
    /// Registry call: no attachment map on the wire, and `subscribe` carries
    /// a single argument whatever its descriptor implies.
    Registry,
}

/// Request header fields extracted by [`DubboCodec::decode_request_header`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestHeader {
    pub id: i64,
    pub two_way: bool,
    /// Event bit: the body is a heartbeat/event payload, not a call.
    pub event: bool,
    pub serial_id: u8,
    pub body_len: usize,
}

/// Response header fields extracted by [`DubboCodec::decode_response_header`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHeader {
    pub id: i64,
    pub status: u8,
    /// Event bit: the body is a heartbeat payload.
    pub event: bool,
    pub serial_id: u8,
    pub body_len: usize,
}

/// Stateless Dubbo frame codec over a pluggable value codec.
#[derive(Debug, Clone, Default)]
pub struct DubboCodec<C = BincodeValues> {
    values: C,
}

impl<C: ValueCodec> DubboCodec<C> {
    pub fn new(values: C) -> Self {
        Self { values }
    }

    /// Encode a request as header + body at the start of `buf`.
    ///
    /// The 16-byte header region is reserved first; the body length is only
    /// known after the body is written, so the header is back-patched and
    /// the cursor restored past header + body.
    pub fn encode_request(&self, req: &Request, buf: &mut WriteBuffer) -> Result<(), CodecError> {
        buf.set_position(HEADER_LEN);

        self.write_str(buf, req.attachment(DUBBO_VERSION_KEY, DEFAULT_DUBBO_VERSION))?;
        self.write_str(buf, req.attachment(PATH_KEY, ""))?;
        self.write_str(buf, req.attachment(VERSION_KEY, DEFAULT_SERVICE_VERSION))?;
        self.write_str(buf, &req.method)?;
        self.write_str(buf, &descriptor_of(&req.arguments))?;
        for arg in &req.arguments {
            self.values.write_value(buf, &arg.value)?;
        }
        let attachments = Value::Map(
            req.attachments
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        );
        self.values.write_value(buf, &attachments)?;

        let body_len = buf.len() - HEADER_LEN;
        let mut flags = FLAG_REQUEST | HESSIAN2_SERIALIZATION_ID;
        if req.two_way {
            flags |= FLAG_TWO_WAY;
        }
        if req.heartbeat || req.event {
            flags |= FLAG_EVENT;
        }
        self.patch_header(buf, flags, 0, req.id, body_len);
        Ok(())
    }

    /// Encode a response as header + body at the start of `buf`.
    pub fn encode_response(&self, rsp: &Response, buf: &mut WriteBuffer) -> Result<(), CodecError> {
        buf.set_position(HEADER_LEN);

        if rsp.heartbeat {
            // heartbeat body is the bare value, no marker byte, whatever
            // the status says
            self.values
                .write_value(buf, rsp.value.as_ref().unwrap_or(&Value::Null))?;
        } else if rsp.status == status::OK {
            if let Some(exception) = &rsp.exception {
                // exception wins over a result value when both are set
                buf.write_u8(RESPONSE_WITH_EXCEPTION);
                self.values.write_value(buf, exception)?;
            } else if let Some(value) = &rsp.value {
                buf.write_u8(RESPONSE_VALUE);
                self.values.write_value(buf, value)?;
            } else {
                buf.write_u8(RESPONSE_NULL_VALUE);
            }
        } else if rsp.error_msg.is_empty() {
            buf.write_u8(RESPONSE_NULL_VALUE);
        } else {
            self.write_str(buf, &rsp.error_msg)?;
        }

        let body_len = buf.len() - HEADER_LEN;
        let mut flags = HESSIAN2_SERIALIZATION_ID;
        if rsp.heartbeat {
            flags |= FLAG_EVENT;
        }
        self.patch_header(buf, flags, rsp.status, rsp.id, body_len);
        Ok(())
    }

    /// Decode a request header. `Ok(None)` means fewer than 16 bytes are
    /// buffered; the caller should retry once more input is available.
    pub fn decode_request_header(
        &self,
        header: &[u8],
    ) -> Result<Option<RequestHeader>, CodecError> {
        if header.len() < HEADER_LEN {
            return Ok(None);
        }
        let (flags, serial_id) = Self::check_common(header)?;
        if flags & FLAG_REQUEST == 0 {
            warn!("rejecting frame: request flag missing");
            return Err(CodecError::NotRequest);
        }
        Ok(Some(RequestHeader {
            id: read_i64_be(&header[4..12]),
            two_way: flags & FLAG_TWO_WAY != 0,
            event: flags & FLAG_EVENT != 0,
            serial_id,
            body_len: read_u32_be(&header[12..16]) as usize,
        }))
    }

    /// Decode a response header. `Ok(None)` means fewer than 16 bytes are
    /// buffered; the caller should retry once more input is available.
    pub fn decode_response_header(
        &self,
        header: &[u8],
    ) -> Result<Option<ResponseHeader>, CodecError> {
        if header.len() < HEADER_LEN {
            return Ok(None);
        }
        let (flags, serial_id) = Self::check_common(header)?;
        Ok(Some(ResponseHeader {
            id: read_i64_be(&header[4..12]),
            status: header[3],
            event: flags & FLAG_EVENT != 0,
            serial_id,
            body_len: read_u32_be(&header[12..16]) as usize,
        }))
    }

    /// Decode a response body of exactly `head.body_len` bytes.
    ///
    /// Value-codec failures never escape this call: they are folded into the
    /// returned response as `SERVER_ERROR` plus a description in
    /// `error_msg`, so a bad payload never takes down sibling frames.
    pub fn decode_response_body(&self, head: &ResponseHeader, body: &mut ReadBuffer) -> Response {
        let mut rsp = Response {
            id: head.id,
            status: head.status,
            heartbeat: head.event,
            ..Default::default()
        };

        if rsp.heartbeat {
            rsp.value = Some(HEARTBEAT_EVENT);
            match self.values.read_value(body) {
                Ok(value) => rsp.value = Some(value),
                Err(e) => absorb(&mut rsp, e),
            }
        } else if rsp.status == status::OK {
            match body.read_u8() {
                Ok(RESPONSE_NULL_VALUE) => rsp.value = None,
                Ok(RESPONSE_VALUE) => match self.values.read_value(body) {
                    Ok(value) => rsp.value = Some(value),
                    Err(e) => absorb(&mut rsp, e),
                },
                Ok(RESPONSE_WITH_EXCEPTION) => {
                    rsp.status = status::SERVICE_ERROR;
                    match self.values.read_value(body) {
                        Ok(value) => rsp.exception = Some(value),
                        Err(e) => absorb(&mut rsp, e),
                    }
                }
                Ok(marker) => {
                    rsp.status = status::SERVER_ERROR;
                    rsp.error_msg = format!("unknown response marker: {marker}");
                }
                Err(e) => {
                    rsp.status = status::SERVER_ERROR;
                    rsp.error_msg = e.to_string();
                }
            }
        } else {
            // non-success frame: the body is the error message
            match self.values.read_value(body) {
                Ok(Value::String(msg)) => rsp.error_msg = msg,
                Ok(_) => rsp.error_msg = "unknown error".to_string(),
                Err(e) => rsp.error_msg = e.to_string(),
            }
        }
        rsp
    }

    /// Decode a request body of exactly `head.body_len` bytes.
    ///
    /// Returns the fully decoded request, or [`BrokenRequest`] carrying the
    /// partial state and failure description when a payload field cannot be
    /// decoded. The frame cannot be trusted past that point.
    pub fn decode_request_body(
        &self,
        head: &RequestHeader,
        body: &mut ReadBuffer,
        mode: DecodeMode,
    ) -> Result<Request, Box<BrokenRequest>> {
        let mut req = Request {
            id: head.id,
            two_way: head.two_way,
            version: DEFAULT_DUBBO_VERSION.to_string(),
            ..Default::default()
        };

        if head.event {
            req.heartbeat = true;
            return match self.values.read_value(body) {
                Ok(payload) => {
                    req.payload = Some(payload);
                    Ok(req)
                }
                Err(e) => Err(broken(req, e)),
            };
        }

        let dubbo_version = match self.values.read_string(body) {
            Ok(s) => s,
            Err(e) => return Err(broken(req, e)),
        };
        let path = match self.values.read_string(body) {
            Ok(s) => s,
            Err(e) => return Err(broken(req, e)),
        };
        let service_version = match self.values.read_string(body) {
            Ok(s) => s,
            Err(e) => return Err(broken(req, e)),
        };
        req.attachments
            .insert(DUBBO_VERSION_KEY.to_string(), dubbo_version);
        req.attachments.insert(PATH_KEY.to_string(), path);
        req.attachments
            .insert(VERSION_KEY.to_string(), service_version.clone());
        req.version = service_version;

        req.method = match self.values.read_string(body) {
            Ok(s) => s,
            Err(e) => return Err(broken(req, e)),
        };

        let type_desc = match self.values.read_string(body) {
            Ok(s) => s,
            Err(e) => return Err(broken(req, e)),
        };
        let mut slots = match slots_from_descriptor(&type_desc) {
            Ok(slots) => slots,
            Err(e) => return Err(broken(req, e)),
        };
        let mut count = slots.len();
        if mode == DecodeMode::Registry && req.method == "subscribe" {
            count = count.min(1);
        }
        for slot in slots.iter_mut().take(count) {
            match self.values.read_value(body) {
                Ok(value) => slot.value = value,
                Err(e) => return Err(broken(req, e)),
            }
        }
        req.arguments = slots;

        if mode == DecodeMode::Standard {
            match self.values.read_string_map(body) {
                Ok(map) => req.attachments.extend(map),
                Err(e) => return Err(broken(req, e)),
            }
        }
        Ok(req)
    }

    fn write_str(&self, buf: &mut WriteBuffer, s: &str) -> Result<(), CodecError> {
        self.values.write_value(buf, &Value::String(s.to_string()))?;
        Ok(())
    }

    fn patch_header(&self, buf: &mut WriteBuffer, flags: u8, stat: u8, id: i64, body_len: usize) {
        let mut header = [0u8; HEADER_LEN];
        header[0..2].copy_from_slice(&MAGIC);
        header[2] = flags;
        header[3] = stat;
        header[4..12].copy_from_slice(&id.to_be_bytes());
        header[12..16].copy_from_slice(&(body_len as u32).to_be_bytes());
        buf.set_position(0);
        buf.write_slice(&header);
        buf.set_position(HEADER_LEN + body_len);
    }

    fn check_common(header: &[u8]) -> Result<(u8, u8), CodecError> {
        if header[0..2] != MAGIC {
            warn!(
                "rejecting frame: bad magic {:02x}{:02x}",
                header[0], header[1]
            );
            return Err(CodecError::InvalidMagic);
        }
        let flags = header[2];
        let serial_id = flags & SERIALIZATION_MASK;
        if serial_id != HESSIAN2_SERIALIZATION_ID {
            warn!("rejecting frame: unsupported serialization id {serial_id}");
            return Err(CodecError::InvalidSerialization(serial_id));
        }
        Ok((flags, serial_id))
    }
}

fn absorb(rsp: &mut Response, err: ValueError) {
    debug!("absorbing response payload decode failure: {err}");
    rsp.status = status::SERVER_ERROR;
    rsp.error_msg = err.to_string();
}

fn broken(partial: Request, err: ValueError) -> Box<BrokenRequest> {
    debug!("request body decode failed: {err}");
    Box::new(BrokenRequest {
        reason: err.to_string(),
        partial,
    })
}

fn read_i64_be(bytes: &[u8]) -> i64 {
    i64::from_be_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

fn read_u32_be(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::message::Argument;

    fn codec() -> DubboCodec {
        DubboCodec::default()
    }

    fn sample_request() -> Request {
        Request {
            id: 7,
            two_way: true,
            method: "sayHello".to_string(),
            arguments: vec![
                Argument::new("Ljava/lang/String;", Value::from("world")),
                Argument::new("I", Value::Int(3)),
            ],
            attachments: [
                ("path", "com.demo.Greeter"),
                ("version", "1.0.0"),
                ("group", "g1"),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
            ..Default::default()
        }
    }

    fn encode_request(req: &Request) -> Vec<u8> {
        let mut buf = WriteBuffer::new();
        codec().encode_request(req, &mut buf).unwrap();
        buf.as_slice().to_vec()
    }

    fn encode_response(rsp: &Response) -> Vec<u8> {
        let mut buf = WriteBuffer::new();
        codec().encode_response(rsp, &mut buf).unwrap();
        buf.as_slice().to_vec()
    }

    fn decode_request(frame: &[u8], mode: DecodeMode) -> Request {
        let head = codec().decode_request_header(frame).unwrap().unwrap();
        assert_eq!(head.body_len, frame.len() - HEADER_LEN);
        let mut body = ReadBuffer::new(frame[HEADER_LEN..].to_vec());
        codec().decode_request_body(&head, &mut body, mode).unwrap()
    }

    fn decode_response(frame: &[u8]) -> Response {
        let head = codec().decode_response_header(frame).unwrap().unwrap();
        assert_eq!(head.body_len, frame.len() - HEADER_LEN);
        let mut body = ReadBuffer::new(frame[HEADER_LEN..].to_vec());
        codec().decode_response_body(&head, &mut body)
    }

    #[test]
    fn test_request_roundtrip() {
        let req = sample_request();
        let frame = encode_request(&req);
        let decoded = decode_request(&frame, DecodeMode::Standard);

        assert_eq!(decoded.id, 7);
        assert!(decoded.two_way);
        assert_eq!(decoded.method, "sayHello");
        assert_eq!(decoded.version, "1.0.0");
        assert_eq!(decoded.arguments, req.arguments);
        assert_eq!(decoded.attachment(PATH_KEY, ""), "com.demo.Greeter");
        assert_eq!(decoded.attachment("group", ""), "g1");
        // protocol version defaults when absent before encoding
        assert_eq!(decoded.attachment(DUBBO_VERSION_KEY, ""), "2.0.0");
    }

    #[test]
    fn test_request_header_layout() {
        let frame = encode_request(&sample_request());
        assert_eq!(&frame[0..2], &[0xda, 0xbb]);
        assert_ne!(frame[2] & FLAG_REQUEST, 0);
        assert_ne!(frame[2] & FLAG_TWO_WAY, 0);
        assert_eq!(frame[2] & FLAG_EVENT, 0);
        assert_eq!(frame[2] & SERIALIZATION_MASK, HESSIAN2_SERIALIZATION_ID);
        assert_eq!(frame[3], 0);
        assert_eq!(&frame[4..12], &7i64.to_be_bytes());
        let body_len = u32::from_be_bytes([frame[12], frame[13], frame[14], frame[15]]);
        assert_eq!(body_len as usize, frame.len() - HEADER_LEN);
    }

    #[test]
    fn test_short_header_needs_more() {
        assert!(codec().decode_request_header(&[0xda]).unwrap().is_none());
        assert!(codec()
            .decode_response_header(&[0u8; HEADER_LEN - 1])
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_bad_magic_rejected() {
        let mut header = [0u8; HEADER_LEN];
        header[0] = 0xde;
        header[1] = 0xad;
        header[2] = FLAG_REQUEST | HESSIAN2_SERIALIZATION_ID;
        assert!(matches!(
            codec().decode_request_header(&header),
            Err(CodecError::InvalidMagic)
        ));
        assert!(matches!(
            codec().decode_response_header(&header),
            Err(CodecError::InvalidMagic)
        ));
    }

    #[test]
    fn test_bad_serialization_rejected() {
        let mut header = [0u8; HEADER_LEN];
        header[0..2].copy_from_slice(&MAGIC);
        header[2] = FLAG_REQUEST | 3;
        assert!(matches!(
            codec().decode_request_header(&header),
            Err(CodecError::InvalidSerialization(3))
        ));
        assert!(matches!(
            codec().decode_response_header(&header),
            Err(CodecError::InvalidSerialization(3))
        ));
    }

    #[test]
    fn test_request_flag_required_on_request_path() {
        let mut header = [0u8; HEADER_LEN];
        header[0..2].copy_from_slice(&MAGIC);
        header[2] = HESSIAN2_SERIALIZATION_ID;
        assert!(matches!(
            codec().decode_request_header(&header),
            Err(CodecError::NotRequest)
        ));
        // same bytes are a valid response header
        assert!(codec().decode_response_header(&header).unwrap().is_some());
    }

    #[test]
    fn test_response_value_roundtrip() {
        let rsp = Response {
            id: 11,
            value: Some(Value::from("result")),
            ..Default::default()
        };
        let frame = encode_response(&rsp);
        assert_eq!(frame[HEADER_LEN], RESPONSE_VALUE);

        let decoded = decode_response(&frame);
        assert_eq!(decoded.id, 11);
        assert!(decoded.is_ok());
        assert_eq!(decoded.value, Some(Value::from("result")));
        assert!(decoded.exception.is_none());
    }

    #[test]
    fn test_response_null_value() {
        let rsp = Response {
            id: 12,
            ..Default::default()
        };
        let frame = encode_response(&rsp);
        assert_eq!(frame.len(), HEADER_LEN + 1);
        assert_eq!(frame[HEADER_LEN], RESPONSE_NULL_VALUE);

        let decoded = decode_response(&frame);
        assert!(decoded.is_ok());
        assert!(decoded.value.is_none());
    }

    #[test]
    fn test_exception_takes_precedence() {
        let rsp = Response {
            id: 13,
            value: Some(Value::from("ignored")),
            exception: Some(Value::from("java.lang.IllegalStateException")),
            ..Default::default()
        };
        let frame = encode_response(&rsp);
        assert_eq!(frame[HEADER_LEN], RESPONSE_WITH_EXCEPTION);

        let decoded = decode_response(&frame);
        assert_eq!(decoded.status, status::SERVICE_ERROR);
        assert_eq!(
            decoded.exception,
            Some(Value::from("java.lang.IllegalStateException"))
        );
        assert!(decoded.value.is_none());
    }

    #[test]
    fn test_error_response_roundtrip() {
        let rsp = Response {
            id: 14,
            status: status::SERVICE_NOT_FOUND,
            error_msg: "no such service".to_string(),
            ..Default::default()
        };
        let decoded = decode_response(&encode_response(&rsp));
        assert_eq!(decoded.status, status::SERVICE_NOT_FOUND);
        assert_eq!(decoded.error_msg, "no such service");
    }

    #[test]
    fn test_heartbeat_response_framing() {
        let rsp = Response {
            id: 15,
            heartbeat: true,
            value: Some(Value::Int(1)),
            ..Default::default()
        };
        let frame = encode_response(&rsp);
        assert_ne!(frame[2] & FLAG_EVENT, 0);
        // no marker byte: the body is exactly one value encoding
        let mut body = ReadBuffer::new(frame[HEADER_LEN..].to_vec());
        assert_eq!(BincodeValues.read_value(&mut body).unwrap(), Value::Int(1));
        assert_eq!(body.remaining(), 0);

        let decoded = decode_response(&frame);
        assert!(decoded.heartbeat);
        assert_eq!(decoded.value, Some(Value::Int(1)));
    }

    #[test]
    fn test_heartbeat_decode_ignores_status() {
        let rsp = Response {
            id: 16,
            status: status::SERVER_ERROR,
            heartbeat: true,
            value: Some(Value::Int(2)),
            ..Default::default()
        };
        let decoded = decode_response(&encode_response(&rsp));
        assert!(decoded.heartbeat);
        assert_eq!(decoded.status, status::SERVER_ERROR);
        assert_eq!(decoded.value, Some(Value::Int(2)));
    }

    #[test]
    fn test_unknown_marker_absorbed() {
        let head = ResponseHeader {
            id: 1,
            status: status::OK,
            event: false,
            serial_id: HESSIAN2_SERIALIZATION_ID,
            body_len: 1,
        };
        let mut body = ReadBuffer::new(vec![9u8]);
        let decoded = codec().decode_response_body(&head, &mut body);
        assert_eq!(decoded.status, status::SERVER_ERROR);
        assert!(decoded.error_msg.contains("marker"));
    }

    #[test]
    fn test_registry_subscribe_single_argument() {
        let req = Request {
            id: 20,
            method: "subscribe".to_string(),
            arguments: vec![
                Argument::new("Ljava/lang/String;", Value::from("only-this-one")),
                Argument::new("I", Value::Int(1)),
                Argument::new("J", Value::Int(2)),
            ],
            ..Default::default()
        };
        let frame = encode_request(&req);
        let head = codec().decode_request_header(&frame).unwrap().unwrap();
        let mut body = ReadBuffer::new(frame[HEADER_LEN..].to_vec());
        let decoded = codec()
            .decode_request_body(&head, &mut body, DecodeMode::Registry)
            .unwrap();

        assert_eq!(decoded.arguments.len(), 3);
        assert_eq!(decoded.arguments[0].value, Value::from("only-this-one"));
        assert!(decoded.arguments[1].value.is_null());
        assert!(decoded.arguments[2].value.is_null());
    }

    #[test]
    fn test_registry_mode_skips_attachments() {
        let frame = encode_request(&sample_request());
        let decoded = {
            let head = codec().decode_request_header(&frame).unwrap().unwrap();
            let mut body = ReadBuffer::new(frame[HEADER_LEN..].to_vec());
            codec()
                .decode_request_body(&head, &mut body, DecodeMode::Registry)
                .unwrap()
        };
        assert_eq!(decoded.arguments.len(), 2);
        assert_eq!(decoded.attachment("group", "absent"), "absent");
        assert_eq!(decoded.attachment(PATH_KEY, ""), "com.demo.Greeter");
    }

    #[test]
    fn test_broken_request_keeps_partial_state() {
        // body with the leading strings and a descriptor promising an
        // argument that never arrives
        let values = BincodeValues;
        let mut buf = WriteBuffer::new();
        for field in ["2.0.0", "com.demo.Greeter", "1.0.0", "sayHello", "I"] {
            values
                .write_value(&mut buf, &Value::from(field))
                .unwrap();
        }
        let head = RequestHeader {
            id: 21,
            two_way: true,
            event: false,
            serial_id: HESSIAN2_SERIALIZATION_ID,
            body_len: buf.len(),
        };
        let mut body = ReadBuffer::new(buf.freeze());
        let err = codec()
            .decode_request_body(&head, &mut body, DecodeMode::Standard)
            .unwrap_err();

        assert!(!err.reason.is_empty());
        assert_eq!(err.partial.method, "sayHello");
        assert!(err.partial.arguments.is_empty());
    }

    #[test]
    fn test_heartbeat_request_payload() {
        let req = Request {
            id: 22,
            heartbeat: true,
            two_way: true,
            ..Default::default()
        };
        let frame = encode_request(&req);
        let head = codec().decode_request_header(&frame).unwrap().unwrap();
        assert!(head.event);

        // event frames decode a single opaque payload value
        let mut body = ReadBuffer::new(frame[HEADER_LEN..].to_vec());
        let decoded = codec()
            .decode_request_body(&head, &mut body, DecodeMode::Standard)
            .unwrap();
        assert!(decoded.heartbeat);
        assert!(decoded.payload.is_some());

        let mut empty = ReadBuffer::new(Vec::<u8>::new());
        assert!(codec()
            .decode_request_body(&head, &mut empty, DecodeMode::Standard)
            .is_err());
    }

    #[test]
    fn test_empty_descriptor_means_no_arguments() {
        let req = Request {
            id: 23,
            method: "ping".to_string(),
            ..Default::default()
        };
        let decoded = decode_request(&encode_request(&req), DecodeMode::Standard);
        assert!(decoded.arguments.is_empty());
        assert_eq!(decoded.method, "ping");
    }
}
