use serde::Serialize;

use crate::models::auth::AuthBlock;

/// Envelope for `GetTransactionStatus`.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionStatusRequest {
    #[serde(rename = "transactionInfoRequest")]
    pub transaction_info_request: TransactionInfoEnvelope,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionInfoEnvelope {
    pub authantication: AuthBlock,
    pub eft: TransactionInfoFields,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionInfoFields {
    #[serde(rename = "FirmId")]
    pub firm_id: String,
    #[serde(rename = "TransactionDate")]
    pub transaction_date: String,
    #[serde(rename = "TransactionId")]
    pub transaction_id: String,
}

/// Envelope for `GetReceipt` (dekont retrieval by key).
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptRequest {
    #[serde(rename = "dekontRequest")]
    pub dekont_request: ReceiptEnvelope,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceiptEnvelope {
    pub authantication: AuthBlock,
    #[serde(rename = "DekontKey")]
    pub dekont_key: String,
    #[serde(rename = "Email")]
    pub email: String,
}

/// Envelope for `GetToken`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    #[serde(rename = "tokenRequest")]
    pub token_request: TokenEnvelope,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenEnvelope {
    pub authantication: AuthBlock,
    #[serde(rename = "TransactionId")]
    pub transaction_id: String,
}
