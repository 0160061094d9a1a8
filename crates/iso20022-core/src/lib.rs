#![deny(missing_docs)]

//! # iso20022-core — Validation Engine for ISO 20022 Message Trees
//!
//! ISO 20022 defines thousands of message variants (camt.*, pacs.*, ...)
//! that all share one structural pattern: a root `Document` wrapping exactly
//! one top-level message body, itself composed of nested records whose
//! leaves are scalars, restricted code values, or "choice" groups where
//! exactly one of several alternative fields must be populated.
//!
//! This crate is the generic engine under all of those variants. Message
//! shapes are *data*, not logic: each record type is described by a static
//! [`RecordDescriptor`] table, and the validator is an interpreter over
//! those tables. No runtime type inspection, no per-message validation code.
//!
//! ## Design Principles
//!
//! 1. **Schema as declarative tables.** [`RecordDescriptor`] /
//!    [`FieldSpec`] / [`ChoiceGroup`] are `'static` data provided once per
//!    message type and never derived from instance values.
//!
//! 2. **Instances carry no schema.** A [`Record`] is an untyped field map;
//!    every rule the validator applies comes from the descriptor it is
//!    walked against.
//!
//! 3. **Deterministic, fail-fast validation.** [`validate`] walks fields in
//!    declared order and stops at the first violation, so the reported
//!    error is a function of the descriptor and the input alone.
//!
//! 4. **Structured errors.** [`ValidationError`] with `thiserror`. No
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod codelist;
pub mod descriptor;
pub mod error;
pub mod validate;
pub mod value;

// Re-export primary types at crate root for ergonomic imports.
pub use codelist::{CodeList, CodeListKind, CodeListRegistry};
pub use descriptor::{
    ChoiceGroup, FieldKind, FieldRole, FieldSpec, MessageDescriptor, NamespaceAttr,
    RecordDescriptor, DEFAULT_NAMESPACE_ATTR, NAMESPACE_PREFIX, XS_NAMESPACE, XSI_NAMESPACE,
};
pub use error::{RegistryError, ValidationError};
pub use validate::validate;
pub use value::{Record, Value};
