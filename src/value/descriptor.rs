//! Java type-descriptor translation
//!
//! Dubbo request bodies carry a compact signature string with one type code
//! per argument (`Ljava/lang/String;I[J` is a string, an int and a long
//! array). Decoders only need the slot count and declared types from it;
//! the values themselves stay opaque.

use super::{Value, ValueError};
use crate::protocol::Argument;

/// Concatenate the argument list's declared types into a descriptor string.
pub fn descriptor_of(arguments: &[Argument]) -> String {
    arguments.iter().map(|arg| arg.java_type.as_str()).collect()
}

/// Split a descriptor into one null-valued argument slot per type code.
/// An empty descriptor yields zero slots.
pub fn slots_from_descriptor(desc: &str) -> Result<Vec<Argument>, ValueError> {
    let bytes = desc.as_bytes();
    let mut slots = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        while i < bytes.len() && bytes[i] == b'[' {
            i += 1;
        }
        match bytes.get(i) {
            Some(b'Z' | b'B' | b'C' | b'S' | b'I' | b'J' | b'F' | b'D') => i += 1,
            Some(b'L') => match desc[i..].find(';') {
                Some(end) => i += end + 1,
                None => {
                    return Err(ValueError::Malformed(format!(
                        "unterminated object type in descriptor {desc:?}"
                    )))
                }
            },
            Some(&code) => {
                return Err(ValueError::Malformed(format!(
                    "unknown type code {:?} in descriptor {desc:?}",
                    code as char
                )))
            }
            None => {
                return Err(ValueError::Malformed(format!(
                    "descriptor {desc:?} ends inside an array type"
                )))
            }
        }
        slots.push(Argument::new(&desc[start..i], Value::Null));
    }
    Ok(slots)
}
