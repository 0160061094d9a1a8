//! # Schema Descriptors
//!
//! Static per-record-type metadata: the ordered field list with kinds and
//! presence roles, and the choice groups declared over those fields. One
//! descriptor table per record type, one [`MessageDescriptor`] per message
//! variant; both are `'static` data provided by the message crates and
//! never derived from instance values.
//!
//! ## Design Decision
//!
//! The source schema family expresses these shapes as struct tags read by a
//! runtime reflection walker. Here the same information is an explicit
//! declarative table, so the validator and the encoders are generic
//! interpreters with no type inspection at all.

use serde::{Deserialize, Serialize};

use crate::codelist::CodeList;

/// Attribute name of a default-namespace declaration.
pub const DEFAULT_NAMESPACE_ATTR: &str = "xmlns";

/// Prefix of every computed message namespace; the message-type identifier
/// (`<msg>.<variant>.<version>`) is appended to it.
pub const NAMESPACE_PREFIX: &str = "urn:iso:std:iso:20022:tech:xsd:";

/// Schema namespace, declared as `xmlns:xs` on every document root.
pub const XS_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Schema-instance namespace, declared as `xmlns:xsi` on every document root.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// The declared kind of a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A plain scalar (text, date, amount, indicator), carried as text.
    Text,
    /// A restricted code value bound to a registry entry.
    Code(&'static CodeList),
    /// A nested record.
    Record(&'static RecordDescriptor),
    /// A repeated nested record.
    RepeatedRecord(&'static RecordDescriptor),
}

/// The presence role of a field within its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Must be populated for the record to validate.
    Required,
    /// May be absent or zero-valued.
    Optional,
    /// Member of the named choice group; exactly one member of the group
    /// must be populated.
    ChoiceMember(&'static str),
}

/// A single field declaration.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// The wire name, e.g. `MsgId`. Case-sensitive.
    pub name: &'static str,
    /// The declared kind.
    pub kind: FieldKind,
    /// The presence role.
    pub role: FieldRole,
}

/// A named set of mutually exclusive fields, of which exactly one must be
/// populated.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceGroup {
    /// The group identifier, used in error reports.
    pub id: &'static str,
    /// The member field names. Always two or more.
    pub members: &'static [&'static str],
}

/// Static metadata for one record type.
///
/// A record's field set and roles are fixed by its descriptor and never
/// mutate at runtime. The descriptor graph is a DAG: record types never
/// reference themselves, so traversal depth is bounded by schema depth.
#[derive(Debug)]
pub struct RecordDescriptor {
    /// The schema type name, e.g. `MessageHeader4`.
    pub type_name: &'static str,
    /// The fields, in declared (wire) order.
    pub fields: &'static [FieldSpec],
    /// The choice groups declared over the fields.
    pub choice_groups: &'static [ChoiceGroup],
}

impl RecordDescriptor {
    /// Look up a field declaration by wire name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Static metadata for one message variant.
#[derive(Debug)]
pub struct MessageDescriptor {
    /// The message-type identifier, e.g. `camt.069.001.03`.
    pub identifier: &'static str,
    /// The element name of the single top-level body, e.g. `GetStgOrdr`.
    pub body_element: &'static str,
    /// The descriptor of the body record.
    pub body: &'static RecordDescriptor,
}

impl MessageDescriptor {
    /// The namespace URI computed from the message-type identifier.
    pub fn namespace(&self) -> String {
        format!("{NAMESPACE_PREFIX}{}", self.identifier)
    }
}

/// A raw namespace-attribute pair on a document root, captured during
/// decode or declared prior to encode for round-trip fidelity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceAttr {
    /// The attribute name, e.g. `xmlns` or `xmlns:xsi`.
    pub name: String,
    /// The attribute value.
    pub value: String,
}

impl NamespaceAttr {
    /// Create an attribute pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Whether this attribute is the default-namespace declaration.
    pub fn is_default_namespace(&self) -> bool {
        self.name == DEFAULT_NAMESPACE_ATTR
    }
}
