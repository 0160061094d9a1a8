//! Decode-side errors. Encoding has no error surface.

use thiserror::Error;

/// Errors from structural decoding of the key-ordered form.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The payload is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field not declared by the record's descriptor.
    #[error("unknown field {field} on {type_name}")]
    UnknownField {
        /// The record type being decoded.
        type_name: String,
        /// The undeclared field name.
        field: String,
    },

    /// The JSON shape disagrees with the declared field kind.
    #[error("type mismatch at {at}: expected {expected}")]
    TypeMismatch {
        /// Dotted location of the mismatch, e.g. `MessageHeader4.MsgId`.
        at: String,
        /// The expected JSON shape.
        expected: &'static str,
    },

    /// The document object does not carry its body element.
    #[error("missing body element {0}")]
    MissingBodyElement(&'static str),
}
