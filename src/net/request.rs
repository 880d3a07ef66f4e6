//! Per-request options accepted by the dispatcher.
//!
//! Replaces a free-form options bag with the fields the dispatcher actually
//! understands. Everything here is passed through to the HTTP call as given,
//! except `Authorization`, which the dispatcher may overwrite.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::types::ApiError;

#[derive(Clone, Debug)]
pub struct RequestOptions {
    /// HTTP method; `GET` unless set.
    pub method: Method,
    /// Caller headers, name to value.
    pub headers: BTreeMap<String, String>,
    /// Query-string pairs appended in order.
    pub query: Vec<(String, String)>,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<Value>,
    /// Whole-request timeout. No timeout when `None`.
    pub timeout: Option<Duration>,
    /// Aborts the request when cancelled.
    pub cancel: Option<CancellationToken>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: BTreeMap::new(),
            query: Vec::new(),
            body: None,
            timeout: None,
            cancel: None,
        }
    }
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post() -> Self {
        Self::default().method(Method::POST)
    }

    #[must_use]
    pub fn delete() -> Self {
        Self::default().method(Method::DELETE)
    }

    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `body` to JSON and attach it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] if `body` cannot be serialized.
    pub fn json<B: Serialize>(self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::InvalidInput(e.to_string()))?;
        Ok(self.body(value))
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}
