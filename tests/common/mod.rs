#![allow(dead_code)]

use async_trait::async_trait;
use auth_front::domain::http::{HttpPostClient, HttpPostParams, HttpResponse, TransportError};
use auth_front::domain::model::{AddAccountParams, AuthenticationParams};
use std::sync::{Arc, Mutex};

/// Records every post and answers with a canned response.
#[derive(Clone)]
pub struct HttpPostClientSpy {
    calls: Arc<Mutex<Vec<HttpPostParams>>>,
    response: Arc<Mutex<Result<HttpResponse, TransportError>>>,
}

impl HttpPostClientSpy {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new(Ok(HttpResponse::new(200u16)))),
        }
    }

    pub fn respond_with(&self, response: HttpResponse) {
        *self.response.lock().unwrap() = Ok(response);
    }

    pub fn fail_with(&self, message: &str) {
        *self.response.lock().unwrap() = Err(TransportError::new(message));
    }

    pub fn calls(&self) -> Vec<HttpPostParams> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpPostClient for HttpPostClientSpy {
    async fn post(&self, params: HttpPostParams) -> Result<HttpResponse, TransportError> {
        self.calls.lock().unwrap().push(params);
        self.response.lock().unwrap().clone()
    }
}

pub fn mock_authentication() -> AuthenticationParams {
    AuthenticationParams {
        email: "ada@example.com".to_string(),
        password: "s3cret-pass".to_string(),
    }
}

pub fn mock_add_account_params() -> AddAccountParams {
    AddAccountParams {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "s3cret-pass".to_string(),
        password_confirmation: "s3cret-pass".to_string(),
    }
}

pub fn account_body(token: &str) -> serde_json::Value {
    serde_json::json!({ "accessToken": token, "name": "Ada Lovelace" })
}
