use chrono::{Local, NaiveDate};

use crate::models::auth::{AuthBlock, Credentials};
use crate::models::eft::{EftEnvelope, EftFields, EftTransferRequest};
use crate::models::havale::{HavaleEnvelope, HavaleFields, HavaleTransferRequest};
use crate::models::query::{
    ReceiptEnvelope, ReceiptRequest, TokenEnvelope, TokenRequest, TransactionInfoEnvelope,
    TransactionInfoFields, TransactionStatusRequest,
};
use crate::models::{
    SenderIdentity, ServiceRequest, CURRENCY_CODE_TRY, PROCESS_TYPE_HAVALE, REASON_DIGER_ODEMELER,
};

/// A transaction date on its way to the wire. Structured dates are formatted
/// to the service's `d.m.Y` form; pre-formatted strings pass through
/// unchanged (matching the format is the caller's responsibility).
#[derive(Debug, Clone)]
pub enum WireDate {
    Raw(String),
    Day(NaiveDate),
}

impl From<NaiveDate> for WireDate {
    fn from(day: NaiveDate) -> Self {
        WireDate::Day(day)
    }
}

impl From<&str> for WireDate {
    fn from(raw: &str) -> Self {
        WireDate::Raw(raw.to_string())
    }
}

impl From<String> for WireDate {
    fn from(raw: String) -> Self {
        WireDate::Raw(raw)
    }
}

/// `d.m.Y` with two-digit day/month; defaults to the current local date.
pub(crate) fn wire_date(date: Option<WireDate>) -> String {
    match date {
        None => Local::now().format("%d.%m.%Y").to_string(),
        Some(WireDate::Day(day)) => day.format("%d.%m.%Y").to_string(),
        Some(WireDate::Raw(raw)) => raw,
    }
}

/// The canonical payee-name form the remote service requires: upper-cased
/// with all whitespace removed.
pub(crate) fn canonical_payee_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Pure request builders: call parameters + sender identity + credentials
/// in, one fixed-shape `ServiceRequest` variant out.
pub struct RequestBuilder<'a> {
    credentials: &'a Credentials,
    sender: &'a SenderIdentity,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(credentials: &'a Credentials, sender: &'a SenderIdentity) -> Self {
        Self {
            credentials,
            sender,
        }
    }

    fn auth(&self) -> AuthBlock {
        AuthBlock::new(self.credentials)
    }

    fn eft_fields(
        &self,
        txn_id: &str,
        amount: f64,
        bank_code: &str,
        branch_code: &str,
        payee_account_no: &str,
        receiver_name: &str,
        description: Option<&str>,
        date: Option<WireDate>,
        reason: Option<&str>,
    ) -> EftTransferRequest {
        EftTransferRequest {
            eft_request: EftEnvelope {
                authantication: self.auth(),
                eft: EftFields {
                    amount,
                    bank_code: bank_code.to_string(),
                    branch_code: branch_code.to_string(),
                    firm_id: self.credentials.username.clone(),
                    is_credit_card: PROCESS_TYPE_HAVALE.to_string(),
                    payee_account_no: payee_account_no.to_string(),
                    payee_name_surname: canonical_payee_name(receiver_name),
                    reason_code: reason.unwrap_or(REASON_DIGER_ODEMELER).to_string(),
                    remitter_iban: self.sender.iban.clone().unwrap_or_default(),
                    transaction_description: description.unwrap_or_default().to_string(),
                    transaction_id: txn_id.to_string(),
                    transaction_date: wire_date(date),
                },
            },
        }
    }

    /// EFT to an IBAN at another bank; routing codes go out as "0".
    pub fn eft_to_iban(
        &self,
        txn_id: &str,
        amount: f64,
        receiver_iban: &str,
        receiver_name: &str,
        description: Option<&str>,
        date: Option<WireDate>,
        reason: Option<&str>,
    ) -> ServiceRequest {
        ServiceRequest::EftByIban(self.eft_fields(
            txn_id,
            amount,
            "0",
            "0",
            receiver_iban,
            receiver_name,
            description,
            date,
            reason,
        ))
    }

    /// EFT to an explicit bank/branch/account destination.
    pub fn eft_to_account(
        &self,
        txn_id: &str,
        amount: f64,
        bank_code: &str,
        branch_code: &str,
        account: &str,
        receiver_name: &str,
        description: Option<&str>,
        date: Option<WireDate>,
        reason: Option<&str>,
    ) -> ServiceRequest {
        ServiceRequest::EftByAccount(self.eft_fields(
            txn_id,
            amount,
            bank_code,
            branch_code,
            account,
            receiver_name,
            description,
            date,
            reason,
        ))
    }

    fn havale_fields(
        &self,
        txn_id: &str,
        amount: f64,
        branch: &str,
        account: &str,
        iban: &str,
        identity_no: Option<&str>,
        description: Option<&str>,
        date: Option<WireDate>,
    ) -> HavaleTransferRequest {
        HavaleTransferRequest {
            havale_request: HavaleEnvelope {
                authantication: self.auth(),
                havale: HavaleFields {
                    amount,
                    identity_no: identity_no.unwrap_or_default().to_string(),
                    check_identity_no: PROCESS_TYPE_HAVALE.to_string(),
                    firm_id: self.credentials.username.clone(),
                    payee_account_no: account.to_string(),
                    payee_branch_code: branch.to_string(),
                    payee_iban: iban.to_string(),
                    process_type: PROCESS_TYPE_HAVALE.to_string(),
                    reason_code: REASON_DIGER_ODEMELER.to_string(),
                    remitter_account_no: self.sender.account.clone().unwrap_or_default(),
                    remitter_branch_code: self.sender.branch.clone().unwrap_or_default(),
                    remitter_currency_code: CURRENCY_CODE_TRY.to_string(),
                    transaction_date: wire_date(date),
                    transaction_description: description.unwrap_or_default().to_string(),
                    transaction_id: txn_id.to_string(),
                },
            },
        }
    }

    pub fn transfer_to_iban(
        &self,
        txn_id: &str,
        amount: f64,
        receiver_iban: &str,
        description: Option<&str>,
        date: Option<WireDate>,
        identity_no: Option<&str>,
    ) -> ServiceRequest {
        ServiceRequest::TransferByIban(self.havale_fields(
            txn_id,
            amount,
            "0",
            "0",
            receiver_iban,
            identity_no,
            description,
            date,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn transfer_to_account(
        &self,
        txn_id: &str,
        amount: f64,
        branch: &str,
        account: &str,
        description: Option<&str>,
        date: Option<WireDate>,
        identity_no: Option<&str>,
        iban: Option<&str>,
    ) -> ServiceRequest {
        ServiceRequest::TransferByAccount(self.havale_fields(
            txn_id,
            amount,
            branch,
            account,
            iban.unwrap_or_default(),
            identity_no,
            description,
            date,
        ))
    }

    pub fn transaction_status(&self, txn_id: &str, date: Option<WireDate>) -> ServiceRequest {
        ServiceRequest::TransactionStatus(TransactionStatusRequest {
            transaction_info_request: TransactionInfoEnvelope {
                authantication: self.auth(),
                eft: TransactionInfoFields {
                    firm_id: self.credentials.username.clone(),
                    transaction_date: wire_date(date),
                    transaction_id: txn_id.to_string(),
                },
            },
        })
    }

    pub fn receipt(&self, dekont_key: &str, email: &str) -> ServiceRequest {
        ServiceRequest::Receipt(ReceiptRequest {
            dekont_request: ReceiptEnvelope {
                authantication: self.auth(),
                dekont_key: dekont_key.to_string(),
                email: email.to_string(),
            },
        })
    }

    pub fn token(&self, txn_id: &str) -> ServiceRequest {
        ServiceRequest::Token(TokenRequest {
            token_request: TokenEnvelope {
                authantication: self.auth(),
                transaction_id: txn_id.to_string(),
            },
        })
    }
}
