//! # iso20022-codec — Wire Forms for ISO 20022 Message Trees
//!
//! Two independent serialized forms over the same record trees, both driven
//! by the static descriptors from `iso20022-core`:
//!
//! - **Key-ordered form** ([`json`]): a flat field-to-value JSON mapping in
//!   descriptor order, omitting empty optional scalars and code values but
//!   keeping required fields and nested records verbatim. Comes with a
//!   structural decoder so validated documents round-trip.
//! - **Namespace-qualified form** ([`xml`]): an element tree whose root
//!   declares the message namespace exactly once; only the single top-level
//!   body element repeats the qualification.
//!
//! Encoding never fails due to content: any tree, validated or not, can be
//! serialized. Only the structural validator rejects input.

pub mod error;
pub mod json;
pub mod xml;

pub use error::CodecError;
