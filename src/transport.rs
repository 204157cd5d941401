use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use serde_json::Value;

use crate::config::TransportOptions;
use crate::error::{Error, TransportError};

/// The remote-call seam. One call per operation; after every attempt the
/// last outbound/inbound headers and bodies stay retrievable for diagnostic
/// capture, which is why calls take `&mut self` (one instance must not be
/// shared between concurrent calls).
#[async_trait]
pub trait Transport: Send {
    async fn invoke(&mut self, operation: &str, request: Value) -> Result<Value, TransportError>;

    fn last_request_headers(&self) -> &str;
    fn last_request_body(&self) -> &str;
    fn last_response_headers(&self) -> &str;
    fn last_response_body(&self) -> &str;
}

fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value.to_str().unwrap_or("<binary>")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Default transport: JSON over HTTP POST to `{endpoint}/{operation}`.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    user_agent: String,
    last_request_headers: String,
    last_request_body: String,
    last_response_headers: String,
    last_response_body: String,
}

impl HttpTransport {
    pub fn new(endpoint: String, options: &TransportOptions) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .connect_timeout(options.connect_timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            user_agent: options.user_agent.clone(),
            last_request_headers: String::new(),
            last_request_body: String::new(),
            last_response_headers: String::new(),
            last_response_body: String::new(),
        })
    }

    fn request_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, value);
        }
        headers
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn invoke(&mut self, operation: &str, request: Value) -> Result<Value, TransportError> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), operation);
        let body = request.to_string();
        let headers = self.request_headers();

        // Outbound capture happens before the send so a failed attempt still
        // leaves the request retrievable.
        self.last_request_headers = format!("POST {}\n{}", url, format_headers(&headers));
        self.last_request_body = body.clone();
        self.last_response_headers.clear();
        self.last_response_body.clear();

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        self.last_response_headers = format!("HTTP {}\n{}", status, format_headers(response.headers()));
        let text = response.text().await?;
        self.last_response_body = text.clone();

        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        serde_json::from_str(&text).map_err(|e| TransportError::Malformed(e.to_string()))
    }

    fn last_request_headers(&self) -> &str {
        &self.last_request_headers
    }

    fn last_request_body(&self) -> &str {
        &self.last_request_body
    }

    fn last_response_headers(&self) -> &str {
        &self.last_response_headers
    }

    fn last_response_body(&self) -> &str {
        &self.last_response_body
    }
}
