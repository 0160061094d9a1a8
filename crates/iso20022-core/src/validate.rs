//! # Structural Validator
//!
//! Recursive walk of a populated record tree against its schema descriptor.
//! Four rule passes per record, each in declared order, fail-fast:
//!
//! 1. Required presence. A required scalar must be non-empty and a required
//!    repeated record must have at least one element. A required nested
//!    record that is unset is checked as the zero instance of its own type,
//!    which surfaces the innermost missing required leaf (or unsatisfied
//!    choice) by name while accepting types that are legal
//!    present-but-empty.
//! 2. Choice groups: exactly one populated member per group.
//! 3. Code-list membership for populated code values.
//! 4. Recursion into populated nested and repeated records.
//!
//! A record with no required fields and no unsatisfied choice groups
//! validates successfully even when entirely zero-valued; empty records
//! are legal placeholders in this schema family.
//!
//! Validation performs no I/O and caches nothing; every call re-walks the
//! tree. Traversal depth is bounded by the descriptor DAG's depth.

use crate::descriptor::{FieldKind, FieldRole, FieldSpec, RecordDescriptor};
use crate::error::ValidationError;
use crate::value::Record;

/// Validate a record tree against its descriptor.
///
/// Returns the first violation encountered, in the descriptor's declared
/// field order; the result is deterministic for a given descriptor and
/// input.
///
/// # Errors
///
/// [`ValidationError::MissingRequiredField`],
/// [`ValidationError::ChoiceNotSatisfied`],
/// [`ValidationError::ChoiceOverspecified`], or
/// [`ValidationError::InvalidCode`]. The namespace check belongs to the
/// document facade and runs before this walk.
pub fn validate(record: &Record, descriptor: &RecordDescriptor) -> Result<(), ValidationError> {
    // 1. Required presence, declared field order.
    for field in descriptor.fields {
        if field.role != FieldRole::Required {
            continue;
        }
        match field.kind {
            FieldKind::Text | FieldKind::Code(_) => {
                if record.text(field.name).map_or(true, str::is_empty) {
                    return Err(ValidationError::MissingRequiredField(field.name.to_string()));
                }
            }
            FieldKind::RepeatedRecord(_) => {
                if record.records(field.name).map_or(true, <[Record]>::is_empty) {
                    return Err(ValidationError::MissingRequiredField(field.name.to_string()));
                }
            }
            FieldKind::Record(nested) => {
                let unset = record.record(field.name).map_or(true, Record::is_empty);
                if unset {
                    // The zero instance stands in for the unset slot; types
                    // with no required leaves accept it.
                    validate(&Record::new(), nested)?;
                }
            }
        }
    }

    // 2. Choice groups, declared group order.
    for group in descriptor.choice_groups {
        let populated = group
            .members
            .iter()
            .filter_map(|name| descriptor.field(name))
            .filter(|field| is_populated(record, field))
            .count();
        match populated {
            0 => return Err(ValidationError::ChoiceNotSatisfied(group.id.to_string())),
            1 => {}
            _ => return Err(ValidationError::ChoiceOverspecified(group.id.to_string())),
        }
    }

    // 3. Code-list membership, declared field order.
    for field in descriptor.fields {
        if let FieldKind::Code(list) = field.kind {
            if let Some(value) = record.text(field.name) {
                if !value.is_empty() && !list.contains(value) {
                    return Err(ValidationError::InvalidCode {
                        field: field.name.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }
    }

    // 4. Recursion into populated nested records, declared field order.
    for field in descriptor.fields {
        match field.kind {
            FieldKind::Record(nested) => {
                if let Some(inner) = record.record(field.name) {
                    if !inner.is_empty() {
                        validate(inner, nested)?;
                    }
                }
            }
            FieldKind::RepeatedRecord(nested) => {
                if let Some(items) = record.records(field.name) {
                    for item in items {
                        validate(item, nested)?;
                    }
                }
            }
            FieldKind::Text | FieldKind::Code(_) => {}
        }
    }

    Ok(())
}

/// Whether a field holds a non-zero value of its declared kind.
fn is_populated(record: &Record, field: &FieldSpec) -> bool {
    match field.kind {
        FieldKind::Text | FieldKind::Code(_) => {
            record.text(field.name).is_some_and(|s| !s.is_empty())
        }
        FieldKind::Record(_) => record.record(field.name).is_some_and(|r| !r.is_empty()),
        FieldKind::RepeatedRecord(_) => {
            record.records(field.name).is_some_and(|items| !items.is_empty())
        }
    }
}
