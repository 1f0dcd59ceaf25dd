//! REST calls to the auth service.
//!
//! `reqwest` drives the requests: the browser build runs on its fetch
//! backend, native builds (tests) on hyper.
//!
//! ERROR HANDLING
//! ==============
//! Any transport failure or non-2xx status becomes a `SubmitError`; nothing is
//! retried. Response bodies are never interpreted beyond logging, so a body
//! that is not JSON is kept as a plain string instead of failing the call.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::SubmitError;
use crate::forms::login::LoginPayload;
use crate::forms::register::RegisterPayload;

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";

/// The two auth endpoints the forms talk to.
///
/// Futures are `?Send` to match the browser fetch backend.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /auth/register`.
    async fn register(&self, payload: &RegisterPayload) -> Result<Value, SubmitError>;

    /// `POST /auth/login`.
    async fn login(&self, payload: &LoginPayload) -> Result<Value, SubmitError>;
}

/// `AuthApi` over HTTP.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }

    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, payload: &T) -> Result<Value, SubmitError> {
        let url = self.config.endpoint(path);
        log::debug!("POST {url}");
        let resp = self.client.post(&url).json(payload).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SubmitError::Status { status: status.as_u16() });
        }
        let text = resp.text().await?;
        Ok(decode_body(text))
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn register(&self, payload: &RegisterPayload) -> Result<Value, SubmitError> {
        self.post_json(REGISTER_PATH, payload).await
    }

    async fn login(&self, payload: &LoginPayload) -> Result<Value, SubmitError> {
        self.post_json(LOGIN_PATH, payload).await
    }
}

/// JSON when it parses, the raw text otherwise; empty bodies become `null`.
fn decode_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
