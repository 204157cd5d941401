use serde::Serialize;

use crate::models::auth::AuthBlock;

/// Envelope for the `Transfer` (havale) operation, covering both the IBAN
/// and the branch+account destinations; the unused fields go out empty.
#[derive(Debug, Clone, Serialize)]
pub struct HavaleTransferRequest {
    #[serde(rename = "havaleRequest")]
    pub havale_request: HavaleEnvelope,
}

#[derive(Debug, Clone, Serialize)]
pub struct HavaleEnvelope {
    pub authantication: AuthBlock,
    pub havale: HavaleFields,
}

/// Field order matches the remote service's schema; do not reorder.
#[derive(Debug, Clone, Serialize)]
pub struct HavaleFields {
    #[serde(rename = "Amount")]
    pub amount: f64,
    /// National ID of the payee, passed through unvalidated.
    #[serde(rename = "IdentityNo")]
    pub identity_no: String,
    #[serde(rename = "CheckIdentityNo")]
    pub check_identity_no: String,
    #[serde(rename = "FirmId")]
    pub firm_id: String,
    #[serde(rename = "PayeeAccountNo")]
    pub payee_account_no: String,
    #[serde(rename = "PayeeBranchCode")]
    pub payee_branch_code: String,
    #[serde(rename = "PayeeIBAN")]
    pub payee_iban: String,
    #[serde(rename = "ProcessType")]
    pub process_type: String,
    #[serde(rename = "ReasonCode")]
    pub reason_code: String,
    #[serde(rename = "RemitterAccountNo")]
    pub remitter_account_no: String,
    #[serde(rename = "RemitterBranchCode")]
    pub remitter_branch_code: String,
    #[serde(rename = "RemitterCurrencyCode")]
    pub remitter_currency_code: String,
    #[serde(rename = "TransactionDate")]
    pub transaction_date: String,
    #[serde(rename = "TransactionDescription")]
    pub transaction_description: String,
    #[serde(rename = "TransactionId")]
    pub transaction_id: String,
}
