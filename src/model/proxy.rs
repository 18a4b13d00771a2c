//! HTTP chat client: token endpoint + reverse-proxy conversation endpoint.

use super::ModelClient;
use crate::error::{AppError, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MessageRequest<'a> {
    message: &'a str,
    conversation_id: String,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    response: String,
}

pub struct ProxyChatClient {
    http: Client,
    backend_url: Option<String>,
    reverse_proxy_url: Option<String>,
}

impl ProxyChatClient {
    pub fn new(
        http: Client,
        backend_url: Option<String>,
        reverse_proxy_url: Option<String>,
    ) -> Self {
        Self { http, backend_url, reverse_proxy_url }
    }

    fn fetch_token(&self, backend_url: &str) -> Result<String> {
        tracing::debug!("Requesting session token from {}", backend_url);
        let response = self
            .http
            .get(backend_url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::ModelRequest(format!("token request failed: {e}")))?;
        let body: TokenResponse = response
            .json()
            .map_err(|e| AppError::ModelRequest(format!("invalid token response: {e}")))?;
        Ok(body.token)
    }
}

impl ModelClient for ProxyChatClient {
    fn send_prompt(&self, prompt: &str) -> Result<String> {
        let backend_url = self.backend_url.as_deref().ok_or_else(|| {
            AppError::ModelRequest("backend token endpoint is not configured (BACKEND_DB)".into())
        })?;
        let proxy_url = self.reverse_proxy_url.as_deref().ok_or_else(|| {
            AppError::ModelRequest(
                "reverse proxy endpoint is not configured (REVERSE_PROXY_URL)".into(),
            )
        })?;

        let token = self.fetch_token(backend_url)?;
        let request = MessageRequest { message: prompt, conversation_id: conversation_id() };

        tracing::debug!("Sending {} chars to {}", prompt.chars().count(), proxy_url);
        let response = self
            .http
            .post(proxy_url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::ModelRequest(e.to_string()))?;
        let body: MessageResponse = response
            .json()
            .map_err(|e| AppError::ModelRequest(format!("invalid model response: {e}")))?;
        Ok(body.response)
    }
}

fn conversation_id() -> String {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos()).unwrap_or(0);
    format!("askterm-{}-{nanos}", std::process::id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_server::serve;

    const JSON: &str = "application/json";

    #[test]
    fn sends_prompt_with_bearer_token() {
        let (base, requests) =
            serve(vec![(200, JSON, r#"{"token":"abc123"}"#), (200, JSON, r#"{"response":"hi there"}"#)]);
        let client = ProxyChatClient::new(
            Client::new(),
            Some(format!("{base}/token")),
            Some(format!("{base}/conversation")),
        );

        let reply = client.send_prompt("hello model").expect("reply");
        assert_eq!(reply, "hi there");

        let token_req = requests.recv().expect("token request");
        assert!(token_req.starts_with("GET /token"));
        let message_req = requests.recv().expect("message request");
        assert!(message_req.starts_with("POST /conversation"));
        assert!(message_req.to_ascii_lowercase().contains("authorization: bearer abc123"));
        assert!(message_req.contains(r#""message":"hello model""#));
    }

    #[test]
    fn backend_error_status_is_model_request_error() {
        let (base, _requests) =
            serve(vec![(200, JSON, r#"{"token":"t"}"#), (500, JSON, r#"{"error":"boom"}"#)]);
        let client = ProxyChatClient::new(
            Client::new(),
            Some(format!("{base}/token")),
            Some(format!("{base}/conversation")),
        );

        let err = client.send_prompt("x").expect_err("500");
        assert!(matches!(err, AppError::ModelRequest(_)));
    }

    #[test]
    fn missing_endpoints_fail_without_network() {
        let client = ProxyChatClient::new(Client::new(), None, Some("http://unused".into()));
        let err = client.send_prompt("x").expect_err("unconfigured");
        assert!(err.to_string().contains("BACKEND_DB"));
    }
}
