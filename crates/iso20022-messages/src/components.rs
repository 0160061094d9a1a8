//! # Shared Component Records
//!
//! Record descriptors reused across the camt and pacs messages: party,
//! agent, account, address and supplementary-data shapes. Pure schema data
//! in declared (wire) field order.

use iso20022_core::{ChoiceGroup, FieldKind, FieldRole, FieldSpec, RecordDescriptor};

use crate::codelists::{
    ACTIVE_OR_HISTORIC_CURRENCY_CODE, ADDRESS_TYPE_2_CODE, EXTERNAL_ACCOUNT_IDENTIFICATION_1_CODE,
    EXTERNAL_CASH_ACCOUNT_TYPE_1_CODE, EXTERNAL_CLEARING_SYSTEM_IDENTIFICATION_1_CODE,
    EXTERNAL_FINANCIAL_INSTITUTION_IDENTIFICATION_1_CODE, EXTERNAL_PROXY_ACCOUNT_TYPE_1_CODE,
};

pub(crate) const fn required(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        role: FieldRole::Required,
    }
}

pub(crate) const fn optional(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        role: FieldRole::Optional,
    }
}

pub(crate) const fn member(
    name: &'static str,
    kind: FieldKind,
    group: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        role: FieldRole::ChoiceMember(group),
    }
}

/// Proprietary identification with issuer context.
pub static GENERIC_IDENTIFICATION_1: RecordDescriptor = RecordDescriptor {
    type_name: "GenericIdentification1",
    fields: &[
        required("Id", FieldKind::Text),
        optional("SchmeNm", FieldKind::Text),
        optional("Issr", FieldKind::Text),
    ],
    choice_groups: &[],
};

/// Short proprietary code with mandatory issuer.
pub static GENERIC_IDENTIFICATION_30: RecordDescriptor = RecordDescriptor {
    type_name: "GenericIdentification30",
    fields: &[
        required("Id", FieldKind::Text),
        required("Issr", FieldKind::Text),
        optional("SchmeNm", FieldKind::Text),
    ],
    choice_groups: &[],
};

pub static ADDRESS_TYPE_3_CHOICE: RecordDescriptor = RecordDescriptor {
    type_name: "AddressType3Choice",
    fields: &[
        member(
            "Cd",
            FieldKind::Code(&ADDRESS_TYPE_2_CODE),
            "AddressType3Choice",
        ),
        member(
            "Prtry",
            FieldKind::Record(&GENERIC_IDENTIFICATION_30),
            "AddressType3Choice",
        ),
    ],
    choice_groups: &[ChoiceGroup {
        id: "AddressType3Choice",
        members: &["Cd", "Prtry"],
    }],
};

pub static POSTAL_ADDRESS_24: RecordDescriptor = RecordDescriptor {
    type_name: "PostalAddress24",
    fields: &[
        optional("AdrTp", FieldKind::Record(&ADDRESS_TYPE_3_CHOICE)),
        optional("Dept", FieldKind::Text),
        optional("SubDept", FieldKind::Text),
        optional("StrtNm", FieldKind::Text),
        optional("BldgNb", FieldKind::Text),
        optional("BldgNm", FieldKind::Text),
        optional("Flr", FieldKind::Text),
        optional("PstBx", FieldKind::Text),
        optional("Room", FieldKind::Text),
        optional("PstCd", FieldKind::Text),
        optional("TwnNm", FieldKind::Text),
        optional("TwnLctnNm", FieldKind::Text),
        optional("DstrctNm", FieldKind::Text),
        optional("CtrySubDvsn", FieldKind::Text),
        optional("Ctry", FieldKind::Text),
    ],
    choice_groups: &[],
};

pub static ACCOUNT_SCHEME_NAME_1_CHOICE: RecordDescriptor = RecordDescriptor {
    type_name: "AccountSchemeName1Choice",
    fields: &[
        member(
            "Cd",
            FieldKind::Code(&EXTERNAL_ACCOUNT_IDENTIFICATION_1_CODE),
            "AccountSchemeName1Choice",
        ),
        member("Prtry", FieldKind::Text, "AccountSchemeName1Choice"),
    ],
    choice_groups: &[ChoiceGroup {
        id: "AccountSchemeName1Choice",
        members: &["Cd", "Prtry"],
    }],
};

pub static GENERIC_ACCOUNT_IDENTIFICATION_1: RecordDescriptor = RecordDescriptor {
    type_name: "GenericAccountIdentification1",
    fields: &[
        required("Id", FieldKind::Text),
        optional("SchmeNm", FieldKind::Record(&ACCOUNT_SCHEME_NAME_1_CHOICE)),
        optional("Issr", FieldKind::Text),
    ],
    choice_groups: &[],
};

/// IBAN or proprietary account identification; exactly one.
pub static ACCOUNT_IDENTIFICATION_4_CHOICE: RecordDescriptor = RecordDescriptor {
    type_name: "AccountIdentification4Choice",
    fields: &[
        member("IBAN", FieldKind::Text, "AccountIdentification4Choice"),
        member(
            "Othr",
            FieldKind::Record(&GENERIC_ACCOUNT_IDENTIFICATION_1),
            "AccountIdentification4Choice",
        ),
    ],
    choice_groups: &[ChoiceGroup {
        id: "AccountIdentification4Choice",
        members: &["IBAN", "Othr"],
    }],
};

pub static CASH_ACCOUNT_TYPE_2_CHOICE: RecordDescriptor = RecordDescriptor {
    type_name: "CashAccountType2Choice",
    fields: &[
        member(
            "Cd",
            FieldKind::Code(&EXTERNAL_CASH_ACCOUNT_TYPE_1_CODE),
            "CashAccountType2Choice",
        ),
        member("Prtry", FieldKind::Text, "CashAccountType2Choice"),
    ],
    choice_groups: &[ChoiceGroup {
        id: "CashAccountType2Choice",
        members: &["Cd", "Prtry"],
    }],
};

pub static PROXY_ACCOUNT_TYPE_1_CHOICE: RecordDescriptor = RecordDescriptor {
    type_name: "ProxyAccountType1Choice",
    fields: &[
        member(
            "Cd",
            FieldKind::Code(&EXTERNAL_PROXY_ACCOUNT_TYPE_1_CODE),
            "ProxyAccountType1Choice",
        ),
        member("Prtry", FieldKind::Text, "ProxyAccountType1Choice"),
    ],
    choice_groups: &[ChoiceGroup {
        id: "ProxyAccountType1Choice",
        members: &["Cd", "Prtry"],
    }],
};

pub static PROXY_ACCOUNT_IDENTIFICATION_1: RecordDescriptor = RecordDescriptor {
    type_name: "ProxyAccountIdentification1",
    fields: &[
        optional("Tp", FieldKind::Record(&PROXY_ACCOUNT_TYPE_1_CHOICE)),
        required("Id", FieldKind::Text),
    ],
    choice_groups: &[],
};

pub static CASH_ACCOUNT_38: RecordDescriptor = RecordDescriptor {
    type_name: "CashAccount38",
    fields: &[
        required("Id", FieldKind::Record(&ACCOUNT_IDENTIFICATION_4_CHOICE)),
        optional("Tp", FieldKind::Record(&CASH_ACCOUNT_TYPE_2_CHOICE)),
        optional("Ccy", FieldKind::Code(&ACTIVE_OR_HISTORIC_CURRENCY_CODE)),
        optional("Nm", FieldKind::Text),
        optional("Prxy", FieldKind::Record(&PROXY_ACCOUNT_IDENTIFICATION_1)),
    ],
    choice_groups: &[],
};

pub static CLEARING_SYSTEM_IDENTIFICATION_2_CHOICE: RecordDescriptor = RecordDescriptor {
    type_name: "ClearingSystemIdentification2Choice",
    fields: &[
        member(
            "Cd",
            FieldKind::Code(&EXTERNAL_CLEARING_SYSTEM_IDENTIFICATION_1_CODE),
            "ClearingSystemIdentification2Choice",
        ),
        member("Prtry", FieldKind::Text, "ClearingSystemIdentification2Choice"),
    ],
    choice_groups: &[ChoiceGroup {
        id: "ClearingSystemIdentification2Choice",
        members: &["Cd", "Prtry"],
    }],
};

pub static CLEARING_SYSTEM_MEMBER_IDENTIFICATION_2: RecordDescriptor = RecordDescriptor {
    type_name: "ClearingSystemMemberIdentification2",
    fields: &[
        optional(
            "ClrSysId",
            FieldKind::Record(&CLEARING_SYSTEM_IDENTIFICATION_2_CHOICE),
        ),
        required("MmbId", FieldKind::Text),
    ],
    choice_groups: &[],
};

pub static FINANCIAL_IDENTIFICATION_SCHEME_NAME_1_CHOICE: RecordDescriptor = RecordDescriptor {
    type_name: "FinancialIdentificationSchemeName1Choice",
    fields: &[
        member(
            "Cd",
            FieldKind::Code(&EXTERNAL_FINANCIAL_INSTITUTION_IDENTIFICATION_1_CODE),
            "FinancialIdentificationSchemeName1Choice",
        ),
        member(
            "Prtry",
            FieldKind::Text,
            "FinancialIdentificationSchemeName1Choice",
        ),
    ],
    choice_groups: &[ChoiceGroup {
        id: "FinancialIdentificationSchemeName1Choice",
        members: &["Cd", "Prtry"],
    }],
};

pub static GENERIC_FINANCIAL_IDENTIFICATION_1: RecordDescriptor = RecordDescriptor {
    type_name: "GenericFinancialIdentification1",
    fields: &[
        required("Id", FieldKind::Text),
        optional(
            "SchmeNm",
            FieldKind::Record(&FINANCIAL_IDENTIFICATION_SCHEME_NAME_1_CHOICE),
        ),
        optional("Issr", FieldKind::Text),
    ],
    choice_groups: &[],
};

/// Every identification path is optional; a bare institution slot is legal.
pub static FINANCIAL_INSTITUTION_IDENTIFICATION_18: RecordDescriptor = RecordDescriptor {
    type_name: "FinancialInstitutionIdentification18",
    fields: &[
        optional("BICFI", FieldKind::Text),
        optional(
            "ClrSysMmbId",
            FieldKind::Record(&CLEARING_SYSTEM_MEMBER_IDENTIFICATION_2),
        ),
        optional("LEI", FieldKind::Text),
        optional("Nm", FieldKind::Text),
        optional("PstlAdr", FieldKind::Record(&POSTAL_ADDRESS_24)),
        optional("Othr", FieldKind::Record(&GENERIC_FINANCIAL_IDENTIFICATION_1)),
    ],
    choice_groups: &[],
};

pub static BRANCH_DATA_3: RecordDescriptor = RecordDescriptor {
    type_name: "BranchData3",
    fields: &[
        optional("Id", FieldKind::Text),
        optional("LEI", FieldKind::Text),
        optional("Nm", FieldKind::Text),
        optional("PstlAdr", FieldKind::Record(&POSTAL_ADDRESS_24)),
    ],
    choice_groups: &[],
};

pub static BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6: RecordDescriptor =
    RecordDescriptor {
        type_name: "BranchAndFinancialInstitutionIdentification6",
        fields: &[
            required(
                "FinInstnId",
                FieldKind::Record(&FINANCIAL_INSTITUTION_IDENTIFICATION_18),
            ),
            optional("BrnchId", FieldKind::Record(&BRANCH_DATA_3)),
        ],
        choice_groups: &[],
    };

pub static DATE_PERIOD_2: RecordDescriptor = RecordDescriptor {
    type_name: "DatePeriod2",
    fields: &[
        optional("FrDt", FieldKind::Text),
        optional("ToDt", FieldKind::Text),
    ],
    choice_groups: &[],
};

/// Open date-period selector; any combination, including none, is legal.
pub static DATE_PERIOD_2_CHOICE: RecordDescriptor = RecordDescriptor {
    type_name: "DatePeriod2Choice",
    fields: &[
        optional("FrDt", FieldKind::Text),
        optional("ToDt", FieldKind::Text),
        optional("FrToDt", FieldKind::Record(&DATE_PERIOD_2)),
    ],
    choice_groups: &[],
};

/// Free-form payload carrier; content is outside the message schema.
pub static SUPPLEMENTARY_DATA_ENVELOPE_1: RecordDescriptor = RecordDescriptor {
    type_name: "SupplementaryDataEnvelope1",
    fields: &[],
    choice_groups: &[],
};

pub static SUPPLEMENTARY_DATA_1: RecordDescriptor = RecordDescriptor {
    type_name: "SupplementaryData1",
    fields: &[
        optional("PlcAndNm", FieldKind::Text),
        required("Envlp", FieldKind::Record(&SUPPLEMENTARY_DATA_ENVELOPE_1)),
    ],
    choice_groups: &[],
};
