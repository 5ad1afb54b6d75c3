use super::*;

use async_trait::async_trait;
use gloo_net::http::Request;

#[derive(Debug, Clone, thiserror::Error)]
pub(super) enum SubmitTransportError {
    #[error("failed to serialize submission body: {0}")]
    EncodeBody(String),
    #[error("failed to build submission request: {0}")]
    BuildRequest(String),
    #[error("network request failed: {0}")]
    Network(String),
    #[error("failed to read response body: {0}")]
    ReadBody(String),
    #[error("response body was not valid JSON: {0}")]
    DecodeBody(String),
}

/// One JSON POST per submission against the fixed endpoint. No retry,
/// no timeout.
pub(super) struct HttpSubmitTransport {
    endpoint: &'static str,
}

impl HttpSubmitTransport {
    pub(super) fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }
}

#[async_trait(?Send)]
impl SubmitTransport for HttpSubmitTransport {
    type Error = SubmitTransportError;

    async fn deliver(&self, payload: &SubmissionPayload) -> Result<SubmitResponse, Self::Error> {
        let body = serde_json::to_string(payload)
            .map_err(|error| SubmitTransportError::EncodeBody(error.to_string()))?;
        let request = Request::post(self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|error| SubmitTransportError::BuildRequest(error.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|error| SubmitTransportError::Network(error.to_string()))?;

        // The backend answers 200 for both outcomes; the JSON status
        // field carries the decision, not the HTTP status.
        let raw = response
            .text()
            .await
            .map_err(|error| SubmitTransportError::ReadBody(error.to_string()))?;
        serde_json::from_str(&raw)
            .map_err(|error| SubmitTransportError::DecodeBody(error.to_string()))
    }
}
