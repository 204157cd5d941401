use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::{json, Value};

use akbank_transfer::error::{Error, TransportError};
use akbank_transfer::service::TransferService;
use akbank_transfer::transport::Transport;
use akbank_transfer::ServiceConfig;

/// Scripted transport: pops one pre-canned outcome per call and records
/// everything that went over the wire.
struct MockTransport {
    script: VecDeque<Result<Value, TransportError>>,
    operations: Vec<String>,
    requests: Vec<Value>,
    last_request_body: String,
    last_response_body: String,
}

impl MockTransport {
    fn new(script: Vec<Result<Value, TransportError>>) -> Self {
        Self {
            script: script.into(),
            operations: Vec::new(),
            requests: Vec::new(),
            last_request_body: String::new(),
            last_response_body: String::new(),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn invoke(&mut self, operation: &str, request: Value) -> Result<Value, TransportError> {
        self.operations.push(operation.to_string());
        self.last_request_body = request.to_string();
        self.last_response_body.clear();
        self.requests.push(request);

        let outcome = self
            .script
            .pop_front()
            .unwrap_or(Err(TransportError::Malformed("script exhausted".into())));
        if let Ok(raw) = &outcome {
            self.last_response_body = raw.to_string();
        }
        outcome
    }

    fn last_request_headers(&self) -> &str {
        "POST /mock"
    }

    fn last_request_body(&self) -> &str {
        &self.last_request_body
    }

    fn last_response_headers(&self) -> &str {
        "HTTP 200 OK"
    }

    fn last_response_body(&self) -> &str {
        &self.last_response_body
    }
}

fn config() -> ServiceConfig {
    let mut config = ServiceConfig::new("FIRM1", "secret");
    config.sender_iban = Some("TR330004600519786457841326".to_string());
    config
}

fn service(script: Vec<Result<Value, TransportError>>) -> TransferService<MockTransport> {
    TransferService::with_transport(config(), MockTransport::new(script)).unwrap()
}

fn approved(envelope: &str, fields: Value) -> Value {
    let mut payload = json!({
        "ReturnCode": 0,
        "ErrorCode": "",
        "ReturnMessage": "Approved (ABC123)"
    });
    payload
        .as_object_mut()
        .unwrap()
        .extend(fields.as_object().unwrap().clone());
    json!({ envelope: payload })
}

#[test]
fn construction_requires_credentials() {
    let transport = MockTransport::new(vec![]);
    let result = TransferService::with_transport(ServiceConfig::new("", "secret"), transport);
    assert!(matches!(result, Err(Error::Config(_))));

    let transport = MockTransport::new(vec![]);
    let result = TransferService::with_transport(ServiceConfig::new("FIRM1", ""), transport);
    assert!(matches!(result, Err(Error::Config(_))));

    let transport = MockTransport::new(vec![]);
    assert!(TransferService::with_transport(config(), transport).is_ok());
}

#[tokio::test]
async fn eft_to_iban_round_trip_derives_dekont_key() {
    let mut service = service(vec![Ok(approved(
        "EftTransferResult",
        json!({ "EftRefNo": "E1" }),
    ))]);

    let result = service
        .eft_to_iban(
            "TXN-1",
            10.5,
            "TR330006100519786457841326",
            "Ali  Veli",
            Some("rent"),
            Some("01.02.2026".into()),
        )
        .await;

    assert!(result.is_success());
    assert_eq!(result.dekont_key.as_deref(), Some("ABC123"));
    assert_eq!(result.reference_code().unwrap(), "E1");

    let transport = service.transport();
    assert_eq!(transport.operations, vec!["EftTransfer"]);
    let sent = &transport.requests[0];
    assert_eq!(
        sent["eftRequest"]["authantication"]["UserName"],
        json!("FIRM1")
    );
    assert_eq!(sent["eftRequest"]["eft"]["PayeeNameSurname"], json!("ALIVELI"));
    assert_eq!(
        sent["eftRequest"]["eft"]["RemitterIBAN"],
        json!("TR330004600519786457841326")
    );
}

#[tokio::test]
async fn success_without_parenthesized_code_yields_empty_dekont_key() {
    let mut service = service(vec![Ok(json!({
        "TransferResult": { "ReturnCode": 0, "ReturnMessage": "Approved", "TransferRefNo": "T7" }
    }))]);

    let result = service
        .transfer_to_iban("TXN-2", 5.0, "TR330006100519786457841326", None, None, None)
        .await;

    assert!(result.is_success());
    assert_eq!(result.dekont_key.as_deref(), Some(""));
    assert_eq!(result.reference_code().unwrap(), "T7");
}

#[tokio::test]
async fn business_failure_never_computes_dekont_key() {
    let mut service = service(vec![Ok(json!({
        "EftTransferResult": {
            "ReturnCode": 5,
            "ErrorCode": "E-05",
            "ReturnMessage": "Rejected (NOPE)"
        }
    }))]);

    let result = service
        .eft_to_account(
            "TXN-3", 42.0, "00062", "1130", "987654", "Ayse Demir", None, None,
        )
        .await;

    assert!(!result.is_success());
    assert_eq!(result.return_code, 5);
    assert_eq!(result.error_code, "E-05");
    assert_eq!(result.dekont_key, None);
}

#[tokio::test]
async fn transport_failure_is_folded_into_the_result_for_every_money_operation() {
    let failure = || Err(TransportError::Malformed("connection timed out".into()));
    let mut service = service(vec![failure(), failure(), failure(), failure()]);

    let results = vec![
        service
            .eft_to_iban("T1", 1.0, "TR330006100519786457841326", "A B", None, None)
            .await,
        service
            .eft_to_account("T2", 1.0, "00062", "1130", "987654", "A B", None, None)
            .await,
        service
            .transfer_to_iban("T3", 1.0, "TR330006100519786457841326", None, None, None)
            .await,
        service
            .transfer_to_account("T4", 1.0, "1130", "987654", None, None, None, None)
            .await,
    ];

    for result in results {
        assert_eq!(result.return_code, -1);
        assert!(!result.return_message.clone().unwrap_or_default().is_empty());
        assert_eq!(result.dekont_key, None);
        assert!(!result.is_success());
    }

    // The outbound request stays retrievable after a failed attempt.
    assert!(!service.transport().last_request_body().is_empty());
}

#[tokio::test]
async fn status_query_surfaces_error_code_and_has_no_reference() {
    let mut service = service(vec![Ok(json!({
        "GetTransactionStatusResult": {
            "ReturnCode": 3,
            "ErrorCode": "NOT_FOUND",
            "ReturnMessage": "No such transaction"
        }
    }))]);

    let result = service
        .get_transaction_status("TXN-9", Some("01.02.2026".into()))
        .await;

    assert_eq!(result.return_code, 3);
    assert_eq!(result.error_code, "NOT_FOUND");
    assert!(matches!(
        result.reference_code(),
        Err(Error::MissingField(_))
    ));
    assert_eq!(service.transport().operations, vec!["GetTransactionStatus"]);
}

#[tokio::test]
async fn receipt_and_token_dispatch_to_their_operations() {
    let mut service = service(vec![
        Ok(json!({ "GetReceiptResult": { "ReturnCode": 0, "ReturnMessage": "Sent" } })),
        Ok(json!({
            "GetTokenResult": {
                "ReturnCode": 0,
                "AccessToken": "tok-1",
                "TokenExpireDate": "01.02.2026"
            }
        })),
    ]);

    let receipt = service.get_receipt("ABC123", "ops@example.com").await;
    assert!(receipt.is_success());
    // Query results carry no derived receipt key.
    assert_eq!(receipt.dekont_key, None);

    let token = service.get_token("TXN-10").await;
    assert!(token.is_success());
    assert_eq!(token.access_token.as_deref(), Some("tok-1"));
    assert_eq!(token.token_expire_date.as_deref(), Some("01.02.2026"));

    assert_eq!(
        service.transport().operations,
        vec!["GetReceipt", "GetToken"]
    );
    assert_eq!(
        service.transport().requests[0]["dekontRequest"]["DekontKey"],
        json!("ABC123")
    );
}

#[tokio::test]
async fn sender_identity_setters_flow_into_requests() {
    let mut service = service(vec![Ok(approved(
        "TransferResult",
        json!({ "TransferRefNo": "T1" }),
    ))]);
    service.from_account("0345", "1234567");

    let _ = service
        .transfer_to_account("TXN-11", 7.0, "1130", "987654", None, None, None, None)
        .await;

    let sent = &service.transport().requests[0];
    assert_eq!(
        sent["havaleRequest"]["havale"]["RemitterBranchCode"],
        json!("0345")
    );
    assert_eq!(
        sent["havaleRequest"]["havale"]["RemitterAccountNo"],
        json!("1234567")
    );
}
