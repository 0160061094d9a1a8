//! # Built-in Code Lists
//!
//! The restricted code sets referenced by the message descriptors. Closed
//! lists carry their published values; `External*Code` types are maintained
//! by ISO outside the message schema, so the tables constrain length only.
//!
//! [`registry`] builds the id-keyed registry once and freezes it; an empty
//! or duplicated list is a configuration error caught on first access, not
//! at document-validate time.

use std::sync::OnceLock;

use iso20022_core::{CodeList, CodeListKind, CodeListRegistry};

/// Standing-order query scope codes.
pub static QUERY_TYPE_2_CODE: CodeList = CodeList {
    id: "QueryType2Code",
    kind: CodeListKind::Closed(&["ALLL", "CHNG", "MODF", "DELD"]),
};

/// Standing-order query result-set codes.
pub static STANDING_ORDER_QUERY_TYPE_1_CODE: CodeList = CodeList {
    id: "StandingOrderQueryType1Code",
    kind: CodeListKind::Closed(&["SLST", "SDTL", "SWLS", "SWDT"]),
};

/// Standing-order type codes (user / predefined).
pub static STANDING_ORDER_TYPE_1_CODE: CodeList = CodeList {
    id: "StandingOrderType1Code",
    kind: CodeListKind::Closed(&["USTO", "PSTO"]),
};

/// Postal address type codes.
pub static ADDRESS_TYPE_2_CODE: CodeList = CodeList {
    id: "AddressType2Code",
    kind: CodeListKind::Closed(&["ADDR", "PBOX", "HOME", "BIZZ", "MLTO", "DLVY"]),
};

/// Execution frequency codes.
pub static FREQUENCY_2_CODE: CodeList = CodeList {
    id: "Frequency2Code",
    kind: CodeListKind::Closed(&[
        "YEAR", "MNTH", "QURT", "MIAN", "WEEK", "DAIL", "ADHO", "INDA", "OVNG",
    ]),
};

/// ISO 4217 alpha-3 currency codes; the full set is maintained outside the
/// message schema, so only the three-character shape is enforced here.
pub static ACTIVE_OR_HISTORIC_CURRENCY_CODE: CodeList = CodeList {
    id: "ActiveOrHistoricCurrencyCode",
    kind: CodeListKind::External {
        min_len: 3,
        max_len: 3,
    },
};

/// Externally maintained account identification scheme codes.
pub static EXTERNAL_ACCOUNT_IDENTIFICATION_1_CODE: CodeList = CodeList {
    id: "ExternalAccountIdentification1Code",
    kind: CodeListKind::External {
        min_len: 1,
        max_len: 4,
    },
};

/// Externally maintained cash account type codes.
pub static EXTERNAL_CASH_ACCOUNT_TYPE_1_CODE: CodeList = CodeList {
    id: "ExternalCashAccountType1Code",
    kind: CodeListKind::External {
        min_len: 1,
        max_len: 4,
    },
};

/// Externally maintained clearing system identification codes.
pub static EXTERNAL_CLEARING_SYSTEM_IDENTIFICATION_1_CODE: CodeList = CodeList {
    id: "ExternalClearingSystemIdentification1Code",
    kind: CodeListKind::External {
        min_len: 1,
        max_len: 5,
    },
};

/// Externally maintained financial institution identification codes.
pub static EXTERNAL_FINANCIAL_INSTITUTION_IDENTIFICATION_1_CODE: CodeList = CodeList {
    id: "ExternalFinancialInstitutionIdentification1Code",
    kind: CodeListKind::External {
        min_len: 1,
        max_len: 4,
    },
};

/// Externally maintained proxy account type codes.
pub static EXTERNAL_PROXY_ACCOUNT_TYPE_1_CODE: CodeList = CodeList {
    id: "ExternalProxyAccountType1Code",
    kind: CodeListKind::External {
        min_len: 1,
        max_len: 4,
    },
};

/// Every list the message descriptors reference.
static ALL: &[&CodeList] = &[
    &QUERY_TYPE_2_CODE,
    &STANDING_ORDER_QUERY_TYPE_1_CODE,
    &STANDING_ORDER_TYPE_1_CODE,
    &ADDRESS_TYPE_2_CODE,
    &FREQUENCY_2_CODE,
    &ACTIVE_OR_HISTORIC_CURRENCY_CODE,
    &EXTERNAL_ACCOUNT_IDENTIFICATION_1_CODE,
    &EXTERNAL_CASH_ACCOUNT_TYPE_1_CODE,
    &EXTERNAL_CLEARING_SYSTEM_IDENTIFICATION_1_CODE,
    &EXTERNAL_FINANCIAL_INSTITUTION_IDENTIFICATION_1_CODE,
    &EXTERNAL_PROXY_ACCOUNT_TYPE_1_CODE,
];

/// The built-in registry over all the declared lists, built on first
/// access and frozen for the life of the process.
pub fn registry() -> &'static CodeListRegistry {
    static REGISTRY: OnceLock<CodeListRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        CodeListRegistry::new(ALL).expect("built-in code lists are non-empty and unique")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_loads() {
        let registry = registry();
        assert_eq!(registry.len(), ALL.len());
    }

    #[test]
    fn closed_lists_answer_membership() {
        let registry = registry();
        assert!(registry.is_member("QueryType2Code", "DELD"));
        assert!(!registry.is_member("QueryType2Code", "test"));
        assert!(registry.is_member("StandingOrderQueryType1Code", "SWLS"));
        assert!(registry.is_member("StandingOrderType1Code", "PSTO"));
        assert!(!registry.is_member("StandingOrderType1Code", "test"));
    }

    #[test]
    fn external_lists_accept_any_value_in_bounds() {
        let registry = registry();
        assert!(registry.is_member("ExternalAccountIdentification1Code", "test"));
        assert!(!registry.is_member("ExternalAccountIdentification1Code", "toolong"));
        assert!(registry.is_member("ActiveOrHistoricCurrencyCode", "USD"));
        assert!(!registry.is_member("ActiveOrHistoricCurrencyCode", "US"));
    }
}
