use std::time::Duration;

use clap::Parser;

use crate::error::Error;
use crate::models::auth::Credentials;
use crate::models::SenderIdentity;

pub const DEFAULT_ENDPOINT: &str = "https://apigateuat.akbank.com/api/MoneyOrderService";

/// Knobs delegated to the transport. Callers merge overrides over these
/// defaults with struct-update syntax; their values win.
#[derive(Debug, Clone)]
pub struct TransportOptions {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            connect_timeout: Duration::from_secs(20),
            user_agent: concat!("akbank-transfer/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Construction-time configuration for the facade. Username and password
/// are required; everything else has a default.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub username: String,
    pub password: String,
    pub sender_iban: Option<String>,
    pub sender_branch: Option<String>,
    pub sender_account: Option<String>,
    pub endpoint: Option<String>,
    pub transport: TransportOptions,
}

impl ServiceConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            sender_iban: None,
            sender_branch: None,
            sender_account: None,
            endpoint: None,
            transport: TransportOptions::default(),
        }
    }

    pub(crate) fn credentials(&self) -> Result<Credentials, Error> {
        if self.username.is_empty() {
            return Err(Error::Config("missing username in config".to_string()));
        }
        if self.password.is_empty() {
            return Err(Error::Config("missing password in config".to_string()));
        }
        Ok(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    pub(crate) fn sender(&self) -> SenderIdentity {
        SenderIdentity {
            iban: self.sender_iban.clone(),
            branch: self.sender_branch.clone(),
            account: self.sender_account.clone(),
        }
    }

    pub(crate) fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }
}

/// Environment-driven settings for the status-query binary.
#[derive(Parser)]
pub struct AppConfig {
    #[clap(env)]
    pub akbank_username: String,

    #[clap(env)]
    pub akbank_password: String,

    #[clap(env)]
    pub akbank_endpoint: Option<String>,

    /// Transaction to look up.
    pub txn_id: String,

    /// Transaction date as d.m.Y; defaults to today.
    pub txn_date: Option<String>,
}
