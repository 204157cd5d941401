use serde::Serialize;

use crate::models::auth::AuthBlock;

/// Envelope for the `EftTransfer` operation.
#[derive(Debug, Clone, Serialize)]
pub struct EftTransferRequest {
    #[serde(rename = "eftRequest")]
    pub eft_request: EftEnvelope,
}

#[derive(Debug, Clone, Serialize)]
pub struct EftEnvelope {
    pub authantication: AuthBlock,
    pub eft: EftFields,
}

/// Field order matches the remote service's schema; do not reorder.
#[derive(Debug, Clone, Serialize)]
pub struct EftFields {
    #[serde(rename = "Amount")]
    pub amount: f64,
    /// "0" when the destination is an IBAN at another bank.
    #[serde(rename = "BankCode")]
    pub bank_code: String,
    #[serde(rename = "BranchCode")]
    pub branch_code: String,
    #[serde(rename = "FirmId")]
    pub firm_id: String,
    /// "H" for a plain transfer, not a card transaction.
    #[serde(rename = "IsCreditCard")]
    pub is_credit_card: String,
    /// Receiver IBAN or plain account number depending on the route.
    #[serde(rename = "PayeeAccountNo")]
    pub payee_account_no: String,
    /// Upper-cased, whitespace-stripped canonical form.
    #[serde(rename = "PayeeNameSurname")]
    pub payee_name_surname: String,
    #[serde(rename = "ReasonCode")]
    pub reason_code: String,
    #[serde(rename = "RemitterIBAN")]
    pub remitter_iban: String,
    #[serde(rename = "TransactionDescription")]
    pub transaction_description: String,
    #[serde(rename = "TransactionId")]
    pub transaction_id: String,
    #[serde(rename = "TransactionDate")]
    pub transaction_date: String,
}
