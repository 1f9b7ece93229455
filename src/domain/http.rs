use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status codes the remote use cases know about. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatusCode {
    Ok,
    NoContent,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    ServerError,
    Other(u16),
}

impl HttpStatusCode {
    pub fn code(self) -> u16 {
        match self {
            HttpStatusCode::Ok => 200,
            HttpStatusCode::NoContent => 204,
            HttpStatusCode::BadRequest => 400,
            HttpStatusCode::Unauthorized => 401,
            HttpStatusCode::Forbidden => 403,
            HttpStatusCode::NotFound => 404,
            HttpStatusCode::Conflict => 409,
            HttpStatusCode::ServerError => 500,
            HttpStatusCode::Other(code) => code,
        }
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        match code {
            200 => HttpStatusCode::Ok,
            204 => HttpStatusCode::NoContent,
            400 => HttpStatusCode::BadRequest,
            401 => HttpStatusCode::Unauthorized,
            403 => HttpStatusCode::Forbidden,
            404 => HttpStatusCode::NotFound,
            409 => HttpStatusCode::Conflict,
            500 => HttpStatusCode::ServerError,
            other => HttpStatusCode::Other(other),
        }
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpPostParams {
    pub url: String,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: HttpStatusCode,
    pub body: Option<serde_json::Value>,
}

impl HttpResponse {
    pub fn new(status_code: impl Into<HttpStatusCode>) -> Self {
        Self {
            status_code: status_code.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// The transport produced no response at all (connect failure, timeout).
/// Non-2xx answers are responses, not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("transport failure: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait HttpPostClient: Send + Sync {
    async fn post(&self, params: HttpPostParams) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_round_trips_through_u16() {
        for code in [200u16, 204, 400, 401, 403, 404, 409, 500, 418, 503] {
            assert_eq!(HttpStatusCode::from(code).code(), code);
        }
        assert_eq!(HttpStatusCode::from(503), HttpStatusCode::Other(503));
    }
}
