use serde::Serialize;

pub mod auth;
pub mod eft;
pub mod havale;
pub mod query;
pub mod result;

/// Akbank's code in the national bank registry.
pub const BANK_CODE: &str = "00046";
pub const BANK_ID: &str = "akbank";
pub const BANK_NAME: &str = "Akbank";

/// Transfer reason codes defined by the remote service.
pub const REASON_KONUT_KIRASI: &str = "01";
pub const REASON_ISYERI_KIRASI: &str = "02";
pub const REASON_DIGER_KIRALAR: &str = "03";
pub const REASON_PERSONEL_ODEMELER: &str = "04";
pub const REASON_AIDAT: &str = "05";
pub const REASON_EGITIM: &str = "06";
pub const REASON_HACIZ_ODEME: &str = "08";
pub const REASON_DIGER_ODEMELER: &str = "99";

pub const CURRENCY_CODE_TRY: &str = "888";

/// "H" selects the plain transfer flow as opposed to a card transaction.
pub const PROCESS_TYPE_HAVALE: &str = "H";

/// Sender-side account coordinates, configured once and reused across calls.
/// Depending on the operation either the IBAN or the branch+account pair is
/// embedded into the outgoing request; the unused one goes out empty.
#[derive(Debug, Clone, Default)]
pub struct SenderIdentity {
    pub iban: Option<String>,
    pub branch: Option<String>,
    pub account: Option<String>,
}

/// One variant per remote operation. Each variant is a fixed-shape struct:
/// the remote service expects the complete field set in a fixed order, with
/// empty/zero placeholders rather than omitted fields.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ServiceRequest {
    EftByIban(eft::EftTransferRequest),
    EftByAccount(eft::EftTransferRequest),
    TransferByIban(havale::HavaleTransferRequest),
    TransferByAccount(havale::HavaleTransferRequest),
    TransactionStatus(query::TransactionStatusRequest),
    Receipt(query::ReceiptRequest),
    Token(query::TokenRequest),
}

impl ServiceRequest {
    /// Remote operation name the request must be dispatched to.
    pub fn operation(&self) -> &'static str {
        match self {
            ServiceRequest::EftByIban(_) | ServiceRequest::EftByAccount(_) => "EftTransfer",
            ServiceRequest::TransferByIban(_) | ServiceRequest::TransferByAccount(_) => "Transfer",
            ServiceRequest::TransactionStatus(_) => "GetTransactionStatus",
            ServiceRequest::Receipt(_) => "GetReceipt",
            ServiceRequest::Token(_) => "GetToken",
        }
    }

    /// True for the four operations that move money and therefore carry a
    /// derived `DekontKey` on their results.
    pub fn is_money_movement(&self) -> bool {
        matches!(
            self,
            ServiceRequest::EftByIban(_)
                | ServiceRequest::EftByAccount(_)
                | ServiceRequest::TransferByIban(_)
                | ServiceRequest::TransferByAccount(_)
        )
    }
}
