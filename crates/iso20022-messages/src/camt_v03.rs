//! # camt v03 Messages
//!
//! Schema tables for the standing-order maintenance pair:
//! `camt.069.001.03` GetStandingOrder and `camt.071.001.03`
//! DeleteStandingOrder.

use iso20022_core::{ChoiceGroup, FieldKind, MessageDescriptor, RecordDescriptor};

use crate::codelists::{
    ACTIVE_OR_HISTORIC_CURRENCY_CODE, FREQUENCY_2_CODE, QUERY_TYPE_2_CODE,
    STANDING_ORDER_QUERY_TYPE_1_CODE, STANDING_ORDER_TYPE_1_CODE,
};
use crate::components::{
    member, optional, required, ACCOUNT_IDENTIFICATION_4_CHOICE,
    BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6, CASH_ACCOUNT_38, DATE_PERIOD_2_CHOICE,
    GENERIC_IDENTIFICATION_1, SUPPLEMENTARY_DATA_1,
};

pub static REQUEST_TYPE_3_CHOICE: RecordDescriptor = RecordDescriptor {
    type_name: "RequestType3Choice",
    fields: &[
        member(
            "Enqry",
            FieldKind::Code(&STANDING_ORDER_QUERY_TYPE_1_CODE),
            "RequestType3Choice",
        ),
        member(
            "Prtry",
            FieldKind::Record(&GENERIC_IDENTIFICATION_1),
            "RequestType3Choice",
        ),
    ],
    choice_groups: &[ChoiceGroup {
        id: "RequestType3Choice",
        members: &["Enqry", "Prtry"],
    }],
};

pub static MESSAGE_HEADER_4: RecordDescriptor = RecordDescriptor {
    type_name: "MessageHeader4",
    fields: &[
        required("MsgId", FieldKind::Text),
        optional("CreDtTm", FieldKind::Text),
        optional("ReqTp", FieldKind::Record(&REQUEST_TYPE_3_CHOICE)),
    ],
    choice_groups: &[],
};

pub static STANDING_ORDER_TYPE_1_CHOICE: RecordDescriptor = RecordDescriptor {
    type_name: "StandingOrderType1Choice",
    fields: &[
        member(
            "Cd",
            FieldKind::Code(&STANDING_ORDER_TYPE_1_CODE),
            "StandingOrderType1Choice",
        ),
        member(
            "Prtry",
            FieldKind::Record(&GENERIC_IDENTIFICATION_1),
            "StandingOrderType1Choice",
        ),
    ],
    choice_groups: &[ChoiceGroup {
        id: "StandingOrderType1Choice",
        members: &["Cd", "Prtry"],
    }],
};

pub static STANDING_ORDER_SEARCH_CRITERIA_3: RecordDescriptor = RecordDescriptor {
    type_name: "StandingOrderSearchCriteria3",
    fields: &[
        optional("KeyAttrbtsInd", FieldKind::Text),
        optional("StgOrdrId", FieldKind::Text),
        optional("Tp", FieldKind::Record(&STANDING_ORDER_TYPE_1_CHOICE)),
        optional(
            "SysMmb",
            FieldKind::Record(&BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6),
        ),
        optional(
            "RspnsblPty",
            FieldKind::Record(&BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6),
        ),
        optional("Ccy", FieldKind::Code(&ACTIVE_OR_HISTORIC_CURRENCY_CODE)),
        optional("Acct", FieldKind::Record(&CASH_ACCOUNT_38)),
        optional(
            "AssoctdPoolAcct",
            FieldKind::Record(&ACCOUNT_IDENTIFICATION_4_CHOICE),
        ),
        optional("Frqcy", FieldKind::Code(&FREQUENCY_2_CODE)),
        optional("VldtyPrd", FieldKind::Record(&DATE_PERIOD_2_CHOICE)),
    ],
    choice_groups: &[],
};

/// Indicator set naming which attributes the response should carry.
pub static STANDING_ORDER_RETURN_CRITERIA_1: RecordDescriptor = RecordDescriptor {
    type_name: "StandingOrderReturnCriteria1",
    fields: &[
        optional("StgOrdrIdInd", FieldKind::Text),
        optional("TpInd", FieldKind::Text),
        optional("SysMmbInd", FieldKind::Text),
        optional("RspnsblPtyInd", FieldKind::Text),
        optional("CcyInd", FieldKind::Text),
        optional("DbtrAcctInd", FieldKind::Text),
        optional("CdtrAcctInd", FieldKind::Text),
        optional("FrqcyInd", FieldKind::Text),
        optional("VldtyPrdInd", FieldKind::Text),
        optional("ZeroSweepInd", FieldKind::Text),
    ],
    choice_groups: &[],
};

pub static STANDING_ORDER_CRITERIA_3: RecordDescriptor = RecordDescriptor {
    type_name: "StandingOrderCriteria3",
    fields: &[
        optional("NewQryNm", FieldKind::Text),
        optional(
            "SchCrit",
            FieldKind::RepeatedRecord(&STANDING_ORDER_SEARCH_CRITERIA_3),
        ),
        optional("RtrCrit", FieldKind::Record(&STANDING_ORDER_RETURN_CRITERIA_1)),
    ],
    choice_groups: &[],
};

pub static STANDING_ORDER_CRITERIA_3_CHOICE: RecordDescriptor = RecordDescriptor {
    type_name: "StandingOrderCriteria3Choice",
    fields: &[
        member("QryNm", FieldKind::Text, "StandingOrderCriteria3Choice"),
        member(
            "NewCrit",
            FieldKind::Record(&STANDING_ORDER_CRITERIA_3),
            "StandingOrderCriteria3Choice",
        ),
    ],
    choice_groups: &[ChoiceGroup {
        id: "StandingOrderCriteria3Choice",
        members: &["QryNm", "NewCrit"],
    }],
};

pub static STANDING_ORDER_QUERY_3: RecordDescriptor = RecordDescriptor {
    type_name: "StandingOrderQuery3",
    fields: &[
        optional("QryTp", FieldKind::Code(&QUERY_TYPE_2_CODE)),
        optional(
            "StgOrdrCrit",
            FieldKind::Record(&STANDING_ORDER_CRITERIA_3_CHOICE),
        ),
    ],
    choice_groups: &[],
};

pub static GET_STANDING_ORDER_V03: RecordDescriptor = RecordDescriptor {
    type_name: "GetStandingOrderV03",
    fields: &[
        required("MsgHdr", FieldKind::Record(&MESSAGE_HEADER_4)),
        optional("StgOrdrQryDef", FieldKind::Record(&STANDING_ORDER_QUERY_3)),
        optional("SplmtryData", FieldKind::RepeatedRecord(&SUPPLEMENTARY_DATA_1)),
    ],
    choice_groups: &[],
};

/// `camt.069.001.03` — GetStandingOrder.
pub static CAMT_069_001_03: MessageDescriptor = MessageDescriptor {
    identifier: "camt.069.001.03",
    body_element: "GetStgOrdr",
    body: &GET_STANDING_ORDER_V03,
};

pub static MESSAGE_HEADER_1: RecordDescriptor = RecordDescriptor {
    type_name: "MessageHeader1",
    fields: &[
        required("MsgId", FieldKind::Text),
        optional("CreDtTm", FieldKind::Text),
    ],
    choice_groups: &[],
};

pub static STANDING_ORDER_IDENTIFICATION_4: RecordDescriptor = RecordDescriptor {
    type_name: "StandingOrderIdentification4",
    fields: &[
        optional("Id", FieldKind::Text),
        required("Acct", FieldKind::Record(&CASH_ACCOUNT_38)),
        optional(
            "AcctOwnr",
            FieldKind::Record(&BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6),
        ),
    ],
    choice_groups: &[],
};

pub static STANDING_ORDER_IDENTIFICATION_5: RecordDescriptor = RecordDescriptor {
    type_name: "StandingOrderIdentification5",
    fields: &[
        required("Acct", FieldKind::Record(&CASH_ACCOUNT_38)),
        optional(
            "AcctOwnr",
            FieldKind::Record(&BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6),
        ),
    ],
    choice_groups: &[],
};

/// Deletion scope: named standing orders, all of them, or neither when the
/// sender relies on defaults. The wire form keeps the slot present even
/// when empty.
pub static STANDING_ORDER_OR_ALL_2_CHOICE: RecordDescriptor = RecordDescriptor {
    type_name: "StandingOrderOrAll2Choice",
    fields: &[
        optional(
            "StgOrdr",
            FieldKind::RepeatedRecord(&STANDING_ORDER_IDENTIFICATION_4),
        ),
        optional(
            "AllStgOrdrs",
            FieldKind::RepeatedRecord(&STANDING_ORDER_IDENTIFICATION_5),
        ),
    ],
    choice_groups: &[],
};

pub static DELETE_STANDING_ORDER_V03: RecordDescriptor = RecordDescriptor {
    type_name: "DeleteStandingOrderV03",
    fields: &[
        required("MsgHdr", FieldKind::Record(&MESSAGE_HEADER_1)),
        required(
            "StgOrdrDtls",
            FieldKind::Record(&STANDING_ORDER_OR_ALL_2_CHOICE),
        ),
        optional("SplmtryData", FieldKind::RepeatedRecord(&SUPPLEMENTARY_DATA_1)),
    ],
    choice_groups: &[],
};

/// `camt.071.001.03` — DeleteStandingOrder.
pub static CAMT_071_001_03: MessageDescriptor = MessageDescriptor {
    identifier: "camt.071.001.03",
    body_element: "DelStgOrdr",
    body: &DELETE_STANDING_ORDER_V03,
};

#[cfg(test)]
mod tests {
    use super::*;
    use iso20022_core::{validate, Record, ValidationError, Value};

    #[test]
    fn zero_value_message_matrix() {
        for descriptor in [
            &GET_STANDING_ORDER_V03,
            &MESSAGE_HEADER_4,
            &REQUEST_TYPE_3_CHOICE,
            &STANDING_ORDER_CRITERIA_3_CHOICE,
            &STANDING_ORDER_TYPE_1_CHOICE,
            &DELETE_STANDING_ORDER_V03,
            &MESSAGE_HEADER_1,
            &STANDING_ORDER_IDENTIFICATION_4,
            &STANDING_ORDER_IDENTIFICATION_5,
        ] {
            assert!(
                validate(&Record::new(), descriptor).is_err(),
                "{} unexpectedly accepted the zero value",
                descriptor.type_name
            );
        }
        for descriptor in [
            &STANDING_ORDER_CRITERIA_3,
            &STANDING_ORDER_QUERY_3,
            &STANDING_ORDER_RETURN_CRITERIA_1,
            &STANDING_ORDER_SEARCH_CRITERIA_3,
            &STANDING_ORDER_OR_ALL_2_CHOICE,
        ] {
            assert!(
                validate(&Record::new(), descriptor).is_ok(),
                "{} unexpectedly rejected the zero value",
                descriptor.type_name
            );
        }
    }

    #[test]
    fn zero_get_standing_order_names_the_header_identifier() {
        let err = validate(&Record::new(), &GET_STANDING_ORDER_V03).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingRequiredField(name) if name == "MsgId"
        ));
    }

    #[test]
    fn search_criteria_codes_are_checked() {
        let crit = Record::new().with("Frqcy", Value::text("MNTH"));
        assert!(validate(&crit, &STANDING_ORDER_SEARCH_CRITERIA_3).is_ok());

        let bad = Record::new().with("Frqcy", Value::text("SOON"));
        assert!(matches!(
            validate(&bad, &STANDING_ORDER_SEARCH_CRITERIA_3),
            Err(ValidationError::InvalidCode { field, .. }) if field == "Frqcy"
        ));
    }

    #[test]
    fn namespaces_are_computed_per_message() {
        assert_eq!(
            CAMT_069_001_03.namespace(),
            "urn:iso:std:iso:20022:tech:xsd:camt.069.001.03"
        );
        assert_eq!(
            CAMT_071_001_03.namespace(),
            "urn:iso:std:iso:20022:tech:xsd:camt.071.001.03"
        );
    }
}
