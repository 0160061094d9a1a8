//! # pacs v04 Messages
//!
//! Schema tables for `pacs.010.001.04` FinancialInstitutionDirectDebit and
//! `pacs.028.001.04` FIToFIPaymentStatusRequest.

use iso20022_core::{FieldKind, MessageDescriptor, RecordDescriptor};

use crate::components::{
    optional, required, BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6, CASH_ACCOUNT_38,
    SUPPLEMENTARY_DATA_1,
};

pub static GROUP_HEADER_92: RecordDescriptor = RecordDescriptor {
    type_name: "GroupHeader92",
    fields: &[
        required("MsgId", FieldKind::Text),
        required("CreDtTm", FieldKind::Text),
        required("NbOfTxs", FieldKind::Text),
        optional("CtrlSum", FieldKind::Text),
        optional(
            "InstgAgt",
            FieldKind::Record(&BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6),
        ),
        optional(
            "InstdAgt",
            FieldKind::Record(&BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6),
        ),
    ],
    choice_groups: &[],
};

pub static PAYMENT_IDENTIFICATION_7: RecordDescriptor = RecordDescriptor {
    type_name: "PaymentIdentification7",
    fields: &[
        optional("InstrId", FieldKind::Text),
        required("EndToEndId", FieldKind::Text),
        optional("TxId", FieldKind::Text),
        optional("UETR", FieldKind::Text),
    ],
    choice_groups: &[],
};

pub static DIRECT_DEBIT_TRANSACTION_INFORMATION_26: RecordDescriptor = RecordDescriptor {
    type_name: "DirectDebitTransactionInformation26",
    fields: &[
        required("PmtId", FieldKind::Record(&PAYMENT_IDENTIFICATION_7)),
        required(
            "Dbtr",
            FieldKind::Record(&BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6),
        ),
        optional("DbtrAcct", FieldKind::Record(&CASH_ACCOUNT_38)),
        optional(
            "DbtrAgt",
            FieldKind::Record(&BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6),
        ),
        optional("DbtrAgtAcct", FieldKind::Record(&CASH_ACCOUNT_38)),
    ],
    choice_groups: &[],
};

pub static CREDIT_INSTRUCTION_4: RecordDescriptor = RecordDescriptor {
    type_name: "CreditInstruction4",
    fields: &[
        required("CdtId", FieldKind::Text),
        optional("BtchBookg", FieldKind::Text),
        optional("IntrBkSttlmDt", FieldKind::Text),
        optional(
            "CdtrAgt",
            FieldKind::Record(&BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6),
        ),
        optional("CdtrAgtAcct", FieldKind::Record(&CASH_ACCOUNT_38)),
        required(
            "Cdtr",
            FieldKind::Record(&BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6),
        ),
        optional("CdtrAcct", FieldKind::Record(&CASH_ACCOUNT_38)),
        required(
            "DrctDbtTxInf",
            FieldKind::RepeatedRecord(&DIRECT_DEBIT_TRANSACTION_INFORMATION_26),
        ),
    ],
    choice_groups: &[],
};

pub static FINANCIAL_INSTITUTION_DIRECT_DEBIT_V04: RecordDescriptor = RecordDescriptor {
    type_name: "FinancialInstitutionDirectDebitV04",
    fields: &[
        required("GrpHdr", FieldKind::Record(&GROUP_HEADER_92)),
        required("CdtInstr", FieldKind::RepeatedRecord(&CREDIT_INSTRUCTION_4)),
        optional("SplmtryData", FieldKind::RepeatedRecord(&SUPPLEMENTARY_DATA_1)),
    ],
    choice_groups: &[],
};

/// `pacs.010.001.04` — FinancialInstitutionDirectDebit.
pub static PACS_010_001_04: MessageDescriptor = MessageDescriptor {
    identifier: "pacs.010.001.04",
    body_element: "FIDrctDbt",
    body: &FINANCIAL_INSTITUTION_DIRECT_DEBIT_V04,
};

pub static GROUP_HEADER_91: RecordDescriptor = RecordDescriptor {
    type_name: "GroupHeader91",
    fields: &[
        required("MsgId", FieldKind::Text),
        required("CreDtTm", FieldKind::Text),
        optional(
            "InstgAgt",
            FieldKind::Record(&BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6),
        ),
        optional(
            "InstdAgt",
            FieldKind::Record(&BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6),
        ),
    ],
    choice_groups: &[],
};

pub static ORIGINAL_GROUP_INFORMATION_27: RecordDescriptor = RecordDescriptor {
    type_name: "OriginalGroupInformation27",
    fields: &[
        required("OrgnlMsgId", FieldKind::Text),
        required("OrgnlMsgNmId", FieldKind::Text),
        optional("OrgnlCreDtTm", FieldKind::Text),
    ],
    choice_groups: &[],
};

pub static PAYMENT_TRANSACTION_113: RecordDescriptor = RecordDescriptor {
    type_name: "PaymentTransaction113",
    fields: &[
        optional("StsReqId", FieldKind::Text),
        optional("OrgnlGrpInf", FieldKind::Record(&ORIGINAL_GROUP_INFORMATION_27)),
        optional("OrgnlInstrId", FieldKind::Text),
        optional("OrgnlEndToEndId", FieldKind::Text),
        optional("OrgnlTxId", FieldKind::Text),
        optional("OrgnlUETR", FieldKind::Text),
        optional(
            "InstgAgt",
            FieldKind::Record(&BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6),
        ),
        optional(
            "InstdAgt",
            FieldKind::Record(&BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6),
        ),
    ],
    choice_groups: &[],
};

pub static FI_TO_FI_PAYMENT_STATUS_REQUEST_V04: RecordDescriptor = RecordDescriptor {
    type_name: "FIToFIPaymentStatusRequestV04",
    fields: &[
        required("GrpHdr", FieldKind::Record(&GROUP_HEADER_91)),
        optional(
            "OrgnlGrpInf",
            FieldKind::RepeatedRecord(&ORIGINAL_GROUP_INFORMATION_27),
        ),
        optional("TxInf", FieldKind::RepeatedRecord(&PAYMENT_TRANSACTION_113)),
        optional("SplmtryData", FieldKind::RepeatedRecord(&SUPPLEMENTARY_DATA_1)),
    ],
    choice_groups: &[],
};

/// `pacs.028.001.04` — FIToFIPaymentStatusRequest.
pub static PACS_028_001_04: MessageDescriptor = MessageDescriptor {
    identifier: "pacs.028.001.04",
    body_element: "FIToFIPmtStsReq",
    body: &FI_TO_FI_PAYMENT_STATUS_REQUEST_V04,
};
