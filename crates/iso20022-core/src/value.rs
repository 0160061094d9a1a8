//! # Record Value Trees
//!
//! The populated side of a message: an untyped tree of named fields. All
//! schema knowledge (kinds, roles, choice groups, ordering) lives in the
//! [`RecordDescriptor`](crate::descriptor::RecordDescriptor) the tree is
//! validated or encoded against; instances carry values only.
//!
//! Scalars are carried as text. ISO 20022 wire scalars (dates, amounts,
//! indicators) are all lexical forms, and the engine's only obligations to
//! them are presence and code-list membership; [`Value::datetime`] covers
//! the one lexical form the engine produces itself.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A field payload within a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A scalar or restricted-code value.
    Text(String),
    /// A nested record.
    Record(Record),
    /// A repeated nested record.
    Records(Vec<Record>),
}

impl Value {
    /// A text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// A UTC timestamp in ISO 20022 lexical form, second precision with a
    /// `Z` suffix (e.g. `2026-01-15T12:00:00Z`).
    pub fn datetime(dt: DateTime<Utc>) -> Self {
        Self::Text(dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
    }

    /// A nested record value.
    pub fn record(record: Record) -> Self {
        Self::Record(record)
    }

    /// A repeated nested record value.
    pub fn records(items: Vec<Record>) -> Self {
        Self::Records(items)
    }

    /// Whether this is the zero value for its kind: the empty string, an
    /// all-zero record, or a zero-length sequence.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Record(r) => r.is_empty(),
            Self::Records(items) => items.is_empty(),
        }
    }
}

/// A node in the message tree: named fields mapped to values.
///
/// The field set and roles are fixed by the record's descriptor; `Record`
/// itself imposes no shape. An absent entry and an entry holding the zero
/// value are equivalent to the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any existing value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.set(name, value);
        self
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The text of a scalar or code field, if present and textual.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(Value::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// The nested record under a field, if present and a record.
    pub fn record(&self, name: &str) -> Option<&Record> {
        match self.fields.get(name) {
            Some(Value::Record(r)) => Some(r),
            _ => None,
        }
    }

    /// The repeated records under a field, if present and repeated.
    pub fn records(&self, name: &str) -> Option<&[Record]> {
        match self.fields.get(name) {
            Some(Value::Records(items)) => Some(items),
            _ => None,
        }
    }

    /// Whether every stored value is the zero value for its kind.
    ///
    /// An entirely zero-valued record is the "unset" form of a nested
    /// record slot; many container types are legal present-but-empty.
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(Value::is_zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_record_is_empty() {
        assert!(Record::new().is_empty());
    }

    #[test]
    fn populated_record_is_not_empty() {
        let record = Record::new().with("MsgId", Value::text("MsgId"));
        assert!(!record.is_empty());
        assert_eq!(record.text("MsgId"), Some("MsgId"));
    }

    #[test]
    fn zero_valued_entries_leave_record_empty() {
        let record = Record::new()
            .with("MsgId", Value::text(""))
            .with("ReqTp", Value::record(Record::new()))
            .with("SplmtryData", Value::records(Vec::new()));
        assert!(record.is_empty());
    }

    #[test]
    fn nested_population_propagates() {
        let inner = Record::new().with("MsgId", Value::text("x"));
        let record = Record::new().with("MsgHdr", Value::record(inner));
        assert!(!record.is_empty());
        assert!(record.record("MsgHdr").is_some());
        assert!(record.record("Missing").is_none());
    }

    #[test]
    fn kind_accessors_reject_mismatched_values() {
        let record = Record::new().with("MsgId", Value::text("x"));
        assert!(record.record("MsgId").is_none());
        assert!(record.records("MsgId").is_none());
    }

    #[test]
    fn datetime_uses_second_precision_zulu_form() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(
            Value::datetime(dt),
            Value::Text("2026-01-15T12:00:00Z".to_string())
        );
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut record = Record::new();
        record.set("MsgId", Value::text("a"));
        record.set("MsgId", Value::text("b"));
        assert_eq!(record.text("MsgId"), Some("b"));
    }
}
