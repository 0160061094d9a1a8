//! # Error Hierarchy
//!
//! Structured error types for the validation engine, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Validation reports a single first-encountered failure (fail-fast, no
//! aggregation). None of these errors are retryable; they indicate a
//! malformed input tree or a malformed registry, not a transient condition.

use thiserror::Error;

/// A structural validation failure.
///
/// Produced by [`validate`](crate::validate::validate) and by the document
/// facade's namespace check. The validator walks fields in the descriptor's
/// declared order, so the reported variant is deterministic for a given
/// descriptor and input tree.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A declared default-namespace attribute disagrees with the namespace
    /// computed from the message-type identifier. Checked before any
    /// structural rule.
    #[error("namespace mismatch: declared \"{found}\", expected \"{expected}\"")]
    NamespaceMismatch {
        /// The namespace computed from the message-type identifier.
        expected: String,
        /// The value of the supplied default-namespace attribute.
        found: String,
    },

    /// A field marked Required holds the zero value for its kind.
    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    /// A choice group has no populated member; exactly one is required.
    #[error("choice group {0}: no member populated, exactly one required")]
    ChoiceNotSatisfied(String),

    /// A choice group has more than one populated member; exactly one is
    /// required.
    #[error("choice group {0}: more than one member populated, exactly one required")]
    ChoiceOverspecified(String),

    /// A populated restricted-code value is not a member of its code list.
    #[error("invalid code \"{value}\" for field {field}")]
    InvalidCode {
        /// The field holding the rejected value.
        field: String,
        /// The rejected value.
        value: String,
    },
}

/// A code-list registry configuration error.
///
/// Registry problems are fatal at build/load time; they are never reported
/// from a document-validate call.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A closed code list was registered with no values.
    #[error("code list {0} has no values")]
    EmptyCodeList(String),

    /// Two code lists were registered under the same identifier.
    #[error("code list {0} registered more than once")]
    DuplicateCodeList(String),
}
