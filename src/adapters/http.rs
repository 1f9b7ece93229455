use crate::domain::http::{HttpPostClient, HttpPostParams, HttpResponse, TransportError};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// JSON-over-HTTP transport. Every status code is handed back as a response;
/// only a missing response is an error.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

fn parse_body(bytes: &[u8]) -> Option<serde_json::Value> {
    if bytes.is_empty() {
        return None;
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(_) => Some(serde_json::Value::String(
            String::from_utf8_lossy(bytes).into_owned(),
        )),
    }
}

#[async_trait]
impl HttpPostClient for ReqwestHttpClient {
    async fn post(&self, params: HttpPostParams) -> std::result::Result<HttpResponse, TransportError> {
        let mut request = self.client.post(&params.url);
        if let Some(body) = &params.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        tracing::debug!("HTTP {} from {}", status, params.url);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(HttpResponse {
            status_code: status.into(),
            body: parse_body(&bytes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_variants() {
        assert_eq!(parse_body(b""), None);
        assert_eq!(
            parse_body(br#"{"accessToken":"t"}"#),
            Some(serde_json::json!({"accessToken": "t"}))
        );
        assert_eq!(
            parse_body(b"Bad Gateway"),
            Some(serde_json::Value::String("Bad Gateway".to_string()))
        );
    }
}
