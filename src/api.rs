use reqwest::Client;
use serde::Deserialize;

use crate::constants::LAMBDA_RESPONSE_PATH;
use crate::errors::{ChatError, ChatResult};

/// Body returned by the Lambda proxy: the answer text and the name of the
/// service that produced it (Lex or Kendra).
#[derive(Debug, Clone, Deserialize)]
pub struct LambdaReply {
    pub message: String,
    pub transmitter: String,
}

/// Thin client over the backend proxy endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Forwards a question to the backend and returns the answer. The
    /// session id correlates turns server-side and is passed unchanged.
    /// No retry, no timeout beyond the client default.
    pub async fn get_lambda_response(
        &self,
        question: &str,
        session_id: &str,
    ) -> ChatResult<LambdaReply> {
        let url = format!("{}{}", self.base_url, LAMBDA_RESPONSE_PATH);

        let response = self
            .http
            .get(&url)
            .query(&[("question", question), ("sessionId", session_id)])
            .send()
            .await
            .map_err(|e| ChatError::api_error(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::api_error(format!(
                "backend returned {status}: {body}"
            )));
        }

        response
            .json::<LambdaReply>()
            .await
            .map_err(|e| ChatError::api_error(format!("failed to parse response: {e}")))
    }
}
