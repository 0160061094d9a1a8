//! # Key-Ordered Form
//!
//! A flat field-to-value JSON mapping in the descriptor's declared field
//! order (`serde_json` is built with `preserve_order` so insertion order is
//! emission order). Emission rules per field:
//!
//! - Scalars and code values: emitted when populated, or always when the
//!   field is required (an empty required scalar emits `""`).
//! - Nested records: emitted verbatim when present in the tree, and as an
//!   empty mapping `{}` when required but unset.
//! - Repeated records: emitted when non-empty, and as `[]` when required
//!   but unset.
//! - Optional and choice-member fields that were never populated are
//!   omitted.
//!
//! The structural decoder is the exact inverse and rejects undeclared
//! fields and shape mismatches; it exists so validated documents round-trip
//! through the key-ordered form.

use serde_json::{Map, Value as JsonValue};

use iso20022_core::{FieldKind, FieldRole, MessageDescriptor, Record, RecordDescriptor, Value};

use crate::error::CodecError;

/// Encode a record as a key-ordered JSON object.
pub fn encode(record: &Record, descriptor: &RecordDescriptor) -> JsonValue {
    let mut map = Map::new();
    for field in descriptor.fields {
        let required = field.role == FieldRole::Required;
        match field.kind {
            FieldKind::Text | FieldKind::Code(_) => {
                let text = record.text(field.name).unwrap_or_default();
                if required || !text.is_empty() {
                    map.insert(field.name.to_string(), JsonValue::String(text.to_string()));
                }
            }
            FieldKind::Record(nested) => {
                if let Some(inner) = record.record(field.name) {
                    map.insert(field.name.to_string(), encode(inner, nested));
                } else if required {
                    map.insert(field.name.to_string(), encode(&Record::new(), nested));
                }
            }
            FieldKind::RepeatedRecord(nested) => {
                let items = record.records(field.name).unwrap_or_default();
                if required || !items.is_empty() {
                    let encoded = items.iter().map(|item| encode(item, nested)).collect();
                    map.insert(field.name.to_string(), JsonValue::Array(encoded));
                }
            }
        }
    }
    JsonValue::Object(map)
}

/// Encode a document as key-ordered JSON bytes: the body record under its
/// body element name.
pub fn encode_document(descriptor: &MessageDescriptor, body: &Record) -> Vec<u8> {
    let mut map = Map::new();
    map.insert(
        descriptor.body_element.to_string(),
        encode(body, descriptor.body),
    );
    JsonValue::Object(map).to_string().into_bytes()
}

/// Decode a key-ordered JSON object into a record tree.
///
/// # Errors
///
/// [`CodecError::UnknownField`] for fields the descriptor does not declare,
/// [`CodecError::TypeMismatch`] where the JSON shape disagrees with the
/// declared kind.
pub fn decode(value: &JsonValue, descriptor: &RecordDescriptor) -> Result<Record, CodecError> {
    let object = value.as_object().ok_or_else(|| CodecError::TypeMismatch {
        at: descriptor.type_name.to_string(),
        expected: "object",
    })?;

    let mut record = Record::new();
    for (key, entry) in object {
        let field = descriptor
            .field(key)
            .ok_or_else(|| CodecError::UnknownField {
                type_name: descriptor.type_name.to_string(),
                field: key.clone(),
            })?;
        let at = || format!("{}.{}", descriptor.type_name, field.name);
        match field.kind {
            FieldKind::Text | FieldKind::Code(_) => {
                let text = entry.as_str().ok_or_else(|| CodecError::TypeMismatch {
                    at: at(),
                    expected: "string",
                })?;
                record.set(field.name, Value::text(text));
            }
            FieldKind::Record(nested) => {
                record.set(field.name, Value::record(decode(entry, nested)?));
            }
            FieldKind::RepeatedRecord(nested) => {
                let entries = entry.as_array().ok_or_else(|| CodecError::TypeMismatch {
                    at: at(),
                    expected: "array",
                })?;
                let items = entries
                    .iter()
                    .map(|item| decode(item, nested))
                    .collect::<Result<Vec<_>, _>>()?;
                record.set(field.name, Value::records(items));
            }
        }
    }
    Ok(record)
}

/// Decode key-ordered document bytes: expects a single-key object holding
/// the body element.
///
/// # Errors
///
/// [`CodecError::Json`] for malformed JSON,
/// [`CodecError::MissingBodyElement`] when the body element is absent, and
/// the [`decode`] errors for the body itself. Keys other than the body
/// element are undeclared.
pub fn decode_document(
    descriptor: &MessageDescriptor,
    bytes: &[u8],
) -> Result<Record, CodecError> {
    let value: JsonValue = serde_json::from_slice(bytes)?;
    let object = value.as_object().ok_or_else(|| CodecError::TypeMismatch {
        at: "Document".to_string(),
        expected: "object",
    })?;
    for key in object.keys() {
        if key != descriptor.body_element {
            return Err(CodecError::UnknownField {
                type_name: "Document".to_string(),
                field: key.clone(),
            });
        }
    }
    let body = object
        .get(descriptor.body_element)
        .ok_or(CodecError::MissingBodyElement(descriptor.body_element))?;
    decode(body, descriptor.body)
}
