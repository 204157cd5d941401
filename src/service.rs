use serde_json::Value;
use tracing::{info, warn};

use crate::builder::{RequestBuilder, WireDate};
use crate::config::ServiceConfig;
use crate::error::Error;
use crate::models::auth::Credentials;
use crate::models::result::NormalizedResult;
use crate::models::{SenderIdentity, ServiceRequest};
use crate::normalize::normalize;
use crate::transport::{HttpTransport, Transport};

/// The public facade: one method per remote operation, each composing a
/// request builder, the transport and the response normalizer. Remote-side
/// outcomes (business failure, transport failure) never come back as `Err`;
/// they are folded into the normalized result and callers branch on
/// `is_success`.
///
/// Methods take `&mut self` because the transport retains last
/// request/response state per call. Reuse an instance sequentially; for
/// concurrent calls use one instance each.
pub struct TransferService<T: Transport = HttpTransport> {
    credentials: Credentials,
    sender: SenderIdentity,
    transport: T,
}

impl TransferService<HttpTransport> {
    /// Fails with `Error::Config` when username or password is missing.
    pub fn new(config: ServiceConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(config.endpoint(), &config.transport)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> TransferService<T> {
    /// Injects a custom transport; the test seam.
    pub fn with_transport(config: ServiceConfig, transport: T) -> Result<Self, Error> {
        Ok(Self {
            credentials: config.credentials()?,
            sender: config.sender(),
            transport,
        })
    }

    pub fn from_iban(&mut self, iban: impl Into<String>) -> &mut Self {
        self.sender.iban = Some(iban.into());
        self
    }

    pub fn from_account(&mut self, branch: impl Into<String>, account: impl Into<String>) -> &mut Self {
        self.sender.branch = Some(branch.into());
        self.sender.account = Some(account.into());
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Interbank EFT to an IBAN at another bank.
    pub async fn eft_to_iban(
        &mut self,
        txn_id: &str,
        amount: f64,
        receiver_iban: &str,
        receiver_name: &str,
        description: Option<&str>,
        date: Option<WireDate>,
    ) -> NormalizedResult {
        let request = RequestBuilder::new(&self.credentials, &self.sender).eft_to_iban(
            txn_id,
            amount,
            receiver_iban,
            receiver_name,
            description,
            date,
            None,
        );
        self.call(request).await
    }

    /// Interbank EFT to an explicit bank/branch/account destination.
    #[allow(clippy::too_many_arguments)]
    pub async fn eft_to_account(
        &mut self,
        txn_id: &str,
        amount: f64,
        bank_code: &str,
        branch_code: &str,
        account: &str,
        receiver_name: &str,
        description: Option<&str>,
        date: Option<WireDate>,
    ) -> NormalizedResult {
        let request = RequestBuilder::new(&self.credentials, &self.sender).eft_to_account(
            txn_id,
            amount,
            bank_code,
            branch_code,
            account,
            receiver_name,
            description,
            date,
            None,
        );
        self.call(request).await
    }

    /// Domestic havale to an IBAN.
    pub async fn transfer_to_iban(
        &mut self,
        txn_id: &str,
        amount: f64,
        receiver_iban: &str,
        description: Option<&str>,
        date: Option<WireDate>,
        identity_no: Option<&str>,
    ) -> NormalizedResult {
        let request = RequestBuilder::new(&self.credentials, &self.sender).transfer_to_iban(
            txn_id,
            amount,
            receiver_iban,
            description,
            date,
            identity_no,
        );
        self.call(request).await
    }

    /// Domestic havale to a branch+account destination.
    #[allow(clippy::too_many_arguments)]
    pub async fn transfer_to_account(
        &mut self,
        txn_id: &str,
        amount: f64,
        branch: &str,
        account: &str,
        description: Option<&str>,
        date: Option<WireDate>,
        identity_no: Option<&str>,
        iban: Option<&str>,
    ) -> NormalizedResult {
        let request = RequestBuilder::new(&self.credentials, &self.sender).transfer_to_account(
            txn_id,
            amount,
            branch,
            account,
            description,
            date,
            identity_no,
            iban,
        );
        self.call(request).await
    }

    pub async fn get_transaction_status(
        &mut self,
        txn_id: &str,
        date: Option<WireDate>,
    ) -> NormalizedResult {
        let request =
            RequestBuilder::new(&self.credentials, &self.sender).transaction_status(txn_id, date);
        self.call(request).await
    }

    pub async fn get_receipt(&mut self, dekont_key: &str, email: &str) -> NormalizedResult {
        let request =
            RequestBuilder::new(&self.credentials, &self.sender).receipt(dekont_key, email);
        self.call(request).await
    }

    pub async fn get_token(&mut self, txn_id: &str) -> NormalizedResult {
        let request = RequestBuilder::new(&self.credentials, &self.sender).token(txn_id);
        self.call(request).await
    }

    /// One remote invocation: encode, invoke, normalize. Transport failures
    /// become `ReturnCode = -1` results instead of errors, and the wire
    /// diagnostic is emitted on every exit path.
    async fn call(&mut self, request: ServiceRequest) -> NormalizedResult {
        let operation = request.operation();
        let money_movement = request.is_money_movement();

        let mut result = match serde_json::to_value(&request) {
            Ok(value) => self.invoke(operation, value).await,
            Err(e) => {
                warn!("failed to encode {} request: {}", operation, e);
                NormalizedResult::transport_failure(format!("failed to encode request: {}", e))
            }
        };

        info!(
            target: "akbank_transfer::wire",
            "<log><request><header>{}</header><body>{}</body></request>\
             <response><header>{}</header><body>{}</body></response></log>",
            self.transport.last_request_headers(),
            self.transport.last_request_body(),
            self.transport.last_response_headers(),
            self.transport.last_response_body(),
        );

        if money_movement {
            result.derive_dekont_key();
        }
        result
    }

    async fn invoke(&mut self, operation: &'static str, value: Value) -> NormalizedResult {
        match self.transport.invoke(operation, value).await {
            Ok(raw) => normalize(raw),
            Err(e) => {
                warn!("{} call failed: {}", operation, e);
                NormalizedResult::transport_failure(e.to_string())
            }
        }
    }
}
