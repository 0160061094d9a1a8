//! # Namespace-Qualified Form
//!
//! The element-tree serialization. The default-namespace declaration is
//! emitted exactly once, on the root `Document` element, using the
//! namespace computed from the message-type identifier; the single
//! top-level body element repeats the same qualification (the schema
//! family's wire convention) and no deeper element declares any namespace.
//!
//! Output is a bare element tree: no XML declaration, no whitespace.
//! Required fields emit even when empty (an unset required container
//! becomes an empty element, not an omission); optional and choice-member
//! fields emit only when populated. Text content is entity-escaped.

use iso20022_core::{
    FieldKind, FieldRole, MessageDescriptor, NamespaceAttr, Record, RecordDescriptor,
    DEFAULT_NAMESPACE_ATTR, XS_NAMESPACE, XSI_NAMESPACE,
};

/// Serialize a document as namespace-qualified XML bytes.
///
/// `attrs` are raw namespace attributes captured during decode or declared
/// by the caller; the three root declarations (`xmlns`, `xmlns:xs`,
/// `xmlns:xsi`) are always emitted from the computed values, and captured
/// duplicates of them are dropped rather than repeated. Never fails due to
/// content.
pub fn encode_document(
    descriptor: &MessageDescriptor,
    body: &Record,
    attrs: &[NamespaceAttr],
) -> Vec<u8> {
    let namespace = descriptor.namespace();
    let mut out = String::new();

    out.push_str("<Document ");
    push_attr(&mut out, DEFAULT_NAMESPACE_ATTR, &namespace);
    out.push(' ');
    push_attr(&mut out, "xmlns:xs", XS_NAMESPACE);
    out.push(' ');
    push_attr(&mut out, "xmlns:xsi", XSI_NAMESPACE);
    for attr in attrs {
        if attr.name == DEFAULT_NAMESPACE_ATTR
            || attr.name == "xmlns:xs"
            || attr.name == "xmlns:xsi"
        {
            continue;
        }
        out.push(' ');
        push_attr(&mut out, &attr.name, &attr.value);
    }
    out.push('>');

    out.push('<');
    out.push_str(descriptor.body_element);
    out.push(' ');
    push_attr(&mut out, DEFAULT_NAMESPACE_ATTR, &namespace);
    out.push('>');
    write_record(&mut out, body, descriptor.body);
    close_element(&mut out, descriptor.body_element);

    close_element(&mut out, "Document");
    out.into_bytes()
}

/// Serialize one record's fields in declared order.
fn write_record(out: &mut String, record: &Record, descriptor: &RecordDescriptor) {
    for field in descriptor.fields {
        let required = field.role == FieldRole::Required;
        match field.kind {
            FieldKind::Text | FieldKind::Code(_) => {
                let text = record.text(field.name).unwrap_or_default();
                if required || !text.is_empty() {
                    open_element(out, field.name);
                    out.push_str(&xml_escape(text));
                    close_element(out, field.name);
                }
            }
            FieldKind::Record(nested) => {
                if let Some(inner) = record.record(field.name) {
                    open_element(out, field.name);
                    write_record(out, inner, nested);
                    close_element(out, field.name);
                } else if required {
                    // Unset required slots stay on the wire; their own
                    // required leaves surface as empty elements in turn.
                    open_element(out, field.name);
                    write_record(out, &Record::new(), nested);
                    close_element(out, field.name);
                }
            }
            FieldKind::RepeatedRecord(nested) => {
                for item in record.records(field.name).unwrap_or_default() {
                    open_element(out, field.name);
                    write_record(out, item, nested);
                    close_element(out, field.name);
                }
            }
        }
    }
}

fn open_element(out: &mut String, name: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
}

fn close_element(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&xml_escape(value));
    out.push('"');
}

/// Escape a string for safe inclusion in XML text content or attribute
/// values. Replaces the five XML special characters with their entity
/// references.
fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use iso20022_core::{FieldSpec, Value};

    static HEADER: RecordDescriptor = RecordDescriptor {
        type_name: "Header",
        fields: &[
            FieldSpec {
                name: "MsgId",
                kind: FieldKind::Text,
                role: FieldRole::Required,
            },
            FieldSpec {
                name: "CreDtTm",
                kind: FieldKind::Text,
                role: FieldRole::Optional,
            },
        ],
        choice_groups: &[],
    };

    static DETAILS: RecordDescriptor = RecordDescriptor {
        type_name: "Details",
        fields: &[FieldSpec {
            name: "Itm",
            kind: FieldKind::RepeatedRecord(&HEADER),
            role: FieldRole::Optional,
        }],
        choice_groups: &[],
    };

    static BODY: RecordDescriptor = RecordDescriptor {
        type_name: "Body",
        fields: &[
            FieldSpec {
                name: "MsgHdr",
                kind: FieldKind::Record(&HEADER),
                role: FieldRole::Required,
            },
            FieldSpec {
                name: "Dtls",
                kind: FieldKind::Record(&DETAILS),
                role: FieldRole::Required,
            },
            FieldSpec {
                name: "Nm",
                kind: FieldKind::Text,
                role: FieldRole::Optional,
            },
        ],
        choice_groups: &[],
    };

    static MESSAGE: MessageDescriptor = MessageDescriptor {
        identifier: "test.001.001.01",
        body_element: "TstMsg",
        body: &BODY,
    };

    fn encode_str(body: &Record, attrs: &[NamespaceAttr]) -> String {
        String::from_utf8(encode_document(&MESSAGE, body, attrs)).unwrap()
    }

    #[test]
    fn namespace_declared_on_root_and_body_only() {
        let body = Record::new().with(
            "MsgHdr",
            Value::record(Record::new().with("MsgId", Value::text("MsgId"))),
        );
        let xml = encode_str(&body, &[]);
        assert_eq!(
            xml,
            "<Document xmlns=\"urn:iso:std:iso:20022:tech:xsd:test.001.001.01\" \
             xmlns:xs=\"http://www.w3.org/2001/XMLSchema\" \
             xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\
             <TstMsg xmlns=\"urn:iso:std:iso:20022:tech:xsd:test.001.001.01\">\
             <MsgHdr><MsgId>MsgId</MsgId></MsgHdr><Dtls></Dtls>\
             </TstMsg></Document>"
        );
        assert_eq!(xml.matches("xmlns=").count(), 2);
    }

    #[test]
    fn required_unset_fields_emit_empty_elements() {
        let xml = encode_str(&Record::new(), &[]);
        assert!(xml.contains("<MsgHdr><MsgId></MsgId></MsgHdr>"));
        assert!(xml.contains("<Dtls></Dtls>"));
        assert!(!xml.contains("<Nm>"));
        assert!(!xml.contains("<CreDtTm>"));
    }

    #[test]
    fn repeated_records_emit_one_element_each() {
        let details = Record::new().with(
            "Itm",
            Value::records(vec![
                Record::new().with("MsgId", Value::text("a")),
                Record::new().with("MsgId", Value::text("b")),
            ]),
        );
        let body = Record::new().with("Dtls", Value::record(details));
        let xml = encode_str(&body, &[]);
        assert!(xml.contains(
            "<Dtls><Itm><MsgId>a</MsgId></Itm><Itm><MsgId>b</MsgId></Itm></Dtls>"
        ));
    }

    #[test]
    fn captured_attrs_pass_through_without_duplicating_declarations() {
        let attrs = vec![
            NamespaceAttr::new("xmlns", "urn:wrong"),
            NamespaceAttr::new("xmlns:xs", "urn:wrong-xs"),
            NamespaceAttr::new("xmlns:abc", "urn:extra"),
        ];
        let xml = encode_str(&Record::new(), &attrs);
        assert!(xml.contains("xmlns:abc=\"urn:extra\""));
        assert!(!xml.contains("urn:wrong"));
        assert_eq!(xml.matches("xmlns=").count(), 2);
        assert_eq!(xml.matches("xmlns:xs=").count(), 1);
    }

    #[test]
    fn text_content_is_escaped() {
        let body = Record::new()
            .with(
                "MsgHdr",
                Value::record(Record::new().with("MsgId", Value::text("a&b<c>"))),
            )
            .with("Nm", Value::text("O'Brien \"Ltd\""));
        let xml = encode_str(&body, &[]);
        assert!(xml.contains("<MsgId>a&amp;b&lt;c&gt;</MsgId>"));
        assert!(xml.contains("<Nm>O&apos;Brien &quot;Ltd&quot;</Nm>"));
    }

    #[test]
    fn xml_escape_handles_empty_and_normal() {
        assert_eq!(xml_escape(""), "");
        assert_eq!(xml_escape("normal text"), "normal text");
        assert_eq!(xml_escape("a&b"), "a&amp;b");
    }
}
