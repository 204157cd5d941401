use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

fn failure_return_code() -> i64 {
    -1
}

fn dekont_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\((.*?)\)").unwrap())
}

/// The flat result shape every operation returns. Heterogeneous remote
/// replies are reduced to this one mapping so calling code has a single
/// decision point (`is_success`) instead of per-operation branching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedResult {
    /// 0 = success; -1 is the substitute for transport-level failures.
    #[serde(rename = "ReturnCode", default = "failure_return_code")]
    pub return_code: i64,
    #[serde(rename = "ErrorCode", default)]
    pub error_code: String,
    #[serde(rename = "ReturnMessage", default)]
    pub return_message: Option<String>,
    #[serde(rename = "EftRefNo", default)]
    pub eft_ref_no: Option<String>,
    #[serde(rename = "TransferRefNo", default)]
    pub transfer_ref_no: Option<String>,
    #[serde(rename = "PayeeNameSurname", default)]
    pub payee_name_surname: Option<String>,
    /// Receipt retrieval key, derived from `ReturnMessage` on successful
    /// money-movement results; `None` on failures and query results.
    #[serde(rename = "DekontKey", default)]
    pub dekont_key: Option<String>,
    #[serde(rename = "AccessToken", default)]
    pub access_token: Option<String>,
    #[serde(rename = "TokenExpireDate", default)]
    pub token_expire_date: Option<String>,
}

impl NormalizedResult {
    /// Stand-in result for a failed remote call attempt.
    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self {
            return_code: -1,
            error_code: String::new(),
            return_message: Some(message.into()),
            eft_ref_no: None,
            transfer_ref_no: None,
            payee_name_surname: None,
            dekont_key: None,
            access_token: None,
            token_expire_date: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.return_code == 0
    }

    /// The operation's reference number, whichever of the EFT or havale
    /// fields the reply carried. Only money-movement results have one;
    /// asking a query result is a usage error.
    pub fn reference_code(&self) -> Result<&str, Error> {
        self.eft_ref_no
            .as_deref()
            .or(self.transfer_ref_no.as_deref())
            .ok_or(Error::MissingField("EftRefNo/TransferRefNo"))
    }

    /// Receipt code embedded in `ReturnMessage` as a parenthesized token,
    /// e.g. `"Approved (ABC123)"`. Empty string when the message has none.
    pub fn dekont_code(&self) -> String {
        let message = self.return_message.as_deref().unwrap_or("");
        dekont_pattern()
            .captures(message)
            .and_then(|captures| captures.get(1))
            .map(|code| code.as_str().to_string())
            .unwrap_or_default()
    }

    /// Populates `DekontKey` on a money-movement result: the parsed receipt
    /// code on success, `None` on any failure.
    pub fn derive_dekont_key(&mut self) {
        self.dekont_key = None;
        if self.is_success() {
            self.dekont_key = Some(self.dekont_code());
        }
    }
}
