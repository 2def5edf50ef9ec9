//! HTTP client for the invoice service, as used by a front end or script.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// Base URL used when `BILLER_API_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connection refused, reset, ...)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status
    #[error("API error {status}: {body}")]
    Api { status: StatusCode, body: Value },
}

impl ClientError {
    /// Validation issues carried by a 400 response, if any
    pub fn issues(&self) -> Option<&Vec<Value>> {
        match self {
            ClientError::Api { status, body } if *status == StatusCode::BAD_REQUEST => {
                body.get("error").and_then(Value::as_array)
            }
            _ => None,
        }
    }
}

/// Client for `POST /generate`. No retries.
#[derive(Debug, Clone)]
pub struct BillerClient {
    client: Client,
    base_url: String,
}

impl BillerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client pointed at `BILLER_API_URL`, or the local default
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::new(std::env::var("BILLER_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit an invoice and return the PDF bytes
    pub async fn generate<T: Serialize + ?Sized>(&self, invoice: &T) -> Result<Vec<u8>, ClientError> {
        let url = format!("{}/generate", self.base_url);

        let response = self.client.post(&url).json(invoice).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            tracing::warn!(status = %status, "Invoice generation rejected");
            return Err(ClientError::Api { status, body });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for BillerClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
