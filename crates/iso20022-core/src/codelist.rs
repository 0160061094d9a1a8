//! # Code-List Registry
//!
//! ISO 20022 restricts many scalar fields to enumerated code sets
//! ("QueryType2Code", "StandingOrderType1Code", ...). Two families exist:
//!
//! - **Closed** lists, published inside the message schema itself.
//!   Membership is exact-match, case-sensitive, no normalization.
//! - **External** lists (`External*Code` types), maintained by ISO outside
//!   the schema and revised on their own cadence. The schema constrains
//!   only the value's length, so membership is a length-bounds check.
//!
//! Lists are static data declared by the message crates; the registry is
//! built once at load time and frozen thereafter. An empty closed list is a
//! configuration error surfaced at registry construction, never from a
//! document-validate call.

use std::collections::BTreeMap;

use crate::error::RegistryError;

/// How membership is decided for a code list.
#[derive(Debug, Clone, Copy)]
pub enum CodeListKind {
    /// A closed enumeration; the value must equal one of the listed codes.
    Closed(&'static [&'static str]),
    /// An externally maintained list; any value whose character count lies
    /// within the inclusive bounds is accepted.
    External {
        /// Minimum accepted length, in characters.
        min_len: usize,
        /// Maximum accepted length, in characters.
        max_len: usize,
    },
}

/// A restricted string type bound to a set of valid literal values.
#[derive(Debug, Clone, Copy)]
pub struct CodeList {
    /// The list identifier, e.g. `QueryType2Code`.
    pub id: &'static str,
    /// The membership rule.
    pub kind: CodeListKind,
}

impl CodeList {
    /// Exact-match membership query. Case-sensitive, no normalization.
    pub fn contains(&self, value: &str) -> bool {
        match self.kind {
            CodeListKind::Closed(values) => values.contains(&value),
            CodeListKind::External { min_len, max_len } => {
                (min_len..=max_len).contains(&value.chars().count())
            }
        }
    }
}

/// An id-keyed lookup over registered code lists, frozen after construction.
#[derive(Debug)]
pub struct CodeListRegistry {
    lists: BTreeMap<&'static str, &'static CodeList>,
}

impl CodeListRegistry {
    /// Build a registry from static list declarations.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyCodeList`] if a closed list has no
    /// values, and [`RegistryError::DuplicateCodeList`] if two lists share
    /// an identifier. Both indicate misconfigured schema data and are fatal
    /// at load time.
    pub fn new(lists: &[&'static CodeList]) -> Result<Self, RegistryError> {
        let mut map = BTreeMap::new();
        for list in lists {
            if let CodeListKind::Closed(values) = list.kind {
                if values.is_empty() {
                    return Err(RegistryError::EmptyCodeList(list.id.to_string()));
                }
            }
            if map.insert(list.id, *list).is_some() {
                return Err(RegistryError::DuplicateCodeList(list.id.to_string()));
            }
        }
        Ok(Self { lists: map })
    }

    /// Membership query by list identifier. Unknown identifiers answer
    /// `false`.
    pub fn is_member(&self, id: &str, value: &str) -> bool {
        self.lists.get(id).is_some_and(|list| list.contains(value))
    }

    /// Look up a registered list by identifier.
    pub fn get(&self, id: &str) -> Option<&'static CodeList> {
        self.lists.get(id).copied()
    }

    /// All registered list identifiers, in sorted order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.lists.keys().copied().collect()
    }

    /// The number of registered lists.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether the registry holds no lists.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
