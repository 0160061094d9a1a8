//! # Document Facade
//!
//! The distinguished root of a message: one [`MessageDescriptor`], the body
//! record, and any raw namespace attributes captured during decode or
//! declared prior to encode. The facade is stateless beyond the wrapped
//! record; validation re-walks the tree on every call and encoding never
//! fails due to content.

use iso20022_codec::{json, xml, CodecError};
use iso20022_core::{validate, MessageDescriptor, NamespaceAttr, Record, ValidationError};

/// A root document for one message variant.
#[derive(Debug, Clone)]
pub struct Document {
    descriptor: &'static MessageDescriptor,
    body: Record,
    attrs: Vec<NamespaceAttr>,
}

impl Document {
    /// Wrap a body record under the given message descriptor.
    pub fn new(descriptor: &'static MessageDescriptor, body: Record) -> Self {
        Self {
            descriptor,
            body,
            attrs: Vec::new(),
        }
    }

    /// Attach raw namespace attributes, replacing any existing set.
    pub fn with_attrs(mut self, attrs: Vec<NamespaceAttr>) -> Self {
        self.attrs = attrs;
        self
    }

    /// The message descriptor this document was built against.
    pub fn descriptor(&self) -> &'static MessageDescriptor {
        self.descriptor
    }

    /// The body record.
    pub fn body(&self) -> &Record {
        &self.body
    }

    /// The attached namespace attributes.
    pub fn attrs(&self) -> &[NamespaceAttr] {
        &self.attrs
    }

    /// The namespace URI computed from the message-type identifier.
    pub fn namespace(&self) -> String {
        self.descriptor.namespace()
    }

    /// Validate the document.
    ///
    /// The namespace check runs first: a supplied default-namespace
    /// attribute that disagrees with the computed namespace fails with
    /// [`ValidationError::NamespaceMismatch`] regardless of structural
    /// correctness. The structural walk of the body follows.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let namespace = self.namespace();
        for attr in &self.attrs {
            if attr.is_default_namespace() && attr.value != namespace {
                return Err(ValidationError::NamespaceMismatch {
                    expected: namespace,
                    found: attr.value.clone(),
                });
            }
        }
        validate(&self.body, self.descriptor.body)
    }

    /// The key-ordered form: the body record under its body element name.
    pub fn to_json(&self) -> Vec<u8> {
        json::encode_document(self.descriptor, &self.body)
    }

    /// The namespace-qualified form: the `Document` element tree.
    pub fn to_xml(&self) -> Vec<u8> {
        xml::encode_document(self.descriptor, &self.body, &self.attrs)
    }

    /// Structurally decode a document from its key-ordered form.
    ///
    /// # Errors
    ///
    /// Propagates the codec's decode errors. No validation is performed;
    /// call [`validate`](Self::validate) on the result.
    pub fn from_json(
        descriptor: &'static MessageDescriptor,
        bytes: &[u8],
    ) -> Result<Self, CodecError> {
        Ok(Self::new(descriptor, json::decode_document(descriptor, bytes)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camt_v03::CAMT_069_001_03;
    use iso20022_core::Value;

    fn minimal_body() -> Record {
        Record::new().with(
            "MsgHdr",
            Value::record(Record::new().with("MsgId", Value::text("MsgId"))),
        )
    }

    #[test]
    fn namespace_mismatch_precedes_structural_errors() {
        // The body is structurally invalid too; the namespace check wins.
        let doc = Document::new(&CAMT_069_001_03, Record::new())
            .with_attrs(vec![NamespaceAttr::new("xmlns", "urn:wrong")]);
        let err = doc.validate().unwrap_err();
        assert!(matches!(err, ValidationError::NamespaceMismatch { .. }));
    }

    #[test]
    fn matching_declared_namespace_is_accepted() {
        let doc = Document::new(&CAMT_069_001_03, minimal_body()).with_attrs(vec![
            NamespaceAttr::new("xmlns", "urn:iso:std:iso:20022:tech:xsd:camt.069.001.03"),
        ]);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn non_default_attrs_do_not_trigger_the_namespace_check() {
        let doc = Document::new(&CAMT_069_001_03, minimal_body())
            .with_attrs(vec![NamespaceAttr::new("xmlns:abc", "urn:wrong")]);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn validate_is_pure_and_repeatable() {
        let doc = Document::new(&CAMT_069_001_03, minimal_body());
        assert!(doc.validate().is_ok());
        assert!(doc.validate().is_ok());
        assert_eq!(doc.body(), &minimal_body());
    }

    #[test]
    fn from_json_round_trips_to_json() {
        let doc = Document::new(&CAMT_069_001_03, minimal_body());
        let bytes = doc.to_json();
        let decoded = Document::from_json(&CAMT_069_001_03, &bytes).unwrap();
        assert_eq!(decoded.body(), doc.body());
        assert!(decoded.validate().is_ok());
    }
}
