//! Request dispatcher for the DealerMate REST API.
//!
//! DESIGN
//! ======
//! `ApiClient` owns the HTTP client, the resolved config, and a handle to the
//! shared `AuthStore`. Each call:
//! 1. reads the current token (never cached between calls),
//! 2. merges `Authorization: Bearer <token>` over the caller's headers when
//!    the token is non-empty,
//! 3. sends `<api_base><path>` with the path appended verbatim,
//! 4. parses the body into the caller's type.
//!
//! ERROR HANDLING
//! ==============
//! Network failures, non-success statuses, and parse failures all come back
//! as `ApiError`. Nothing is retried or swallowed here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use reqwest::RequestBuilder;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use super::request::RequestOptions;
use super::types::ApiError;
use crate::config::ClientConfig;
use crate::state::auth::AuthStore;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    auth: AuthStore,
}

impl ApiClient {
    /// Build a client that authenticates with whatever `auth` holds at call time.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: ClientConfig, auth: AuthStore) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config, auth })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The auth session this client reads tokens from.
    #[must_use]
    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    /// Perform a request against `<api_base><path>` and parse the body as `T`.
    ///
    /// An empty response body is parsed as JSON `null`, so `T` may be
    /// `serde_json::Value` or an `Option` for routes that return nothing.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if a header is invalid, the request fails or
    /// times out or is cancelled, the status is not 2xx, or the body does not
    /// parse as `T`.
    pub async fn request<T: DeserializeOwned>(&self, path: &str, opts: RequestOptions) -> Result<T, ApiError> {
        let token = self.auth.token().await;
        let headers = build_headers(&opts.headers, &token)?;
        let url = resolve_url(&self.config.api_base, path);

        tracing::debug!(method = %opts.method, %url, bearer = !token.is_empty(), "dispatching request");

        let mut builder = self.http.request(opts.method, url.as_str()).headers(headers);
        if !opts.query.is_empty() {
            builder = builder.query(&opts.query);
        }
        if let Some(body) = &opts.body {
            builder = builder.json(body);
        }
        if let Some(timeout) = opts.timeout {
            builder = builder.timeout(timeout);
        }

        let send = send_and_parse::<T>(builder);
        match opts.cancel {
            Some(cancel) => tokio::select! {
                biased;
                () = cancel.cancelled() => Err(ApiError::Cancelled),
                result = send => result,
            },
            None => send.await,
        }
    }
}

async fn send_and_parse<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = builder.send().await.map_err(map_reqwest_error)?;
    let status = response.status();
    let text = response.text().await.map_err(map_reqwest_error)?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "API returned non-success status");
        return Err(ApiError::Status { status: status.as_u16(), body: text });
    }

    let raw = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

fn map_reqwest_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Request(error.to_string())
    }
}

/// Concatenate base and path as given. No slash normalization.
#[must_use]
pub fn resolve_url(api_base: &str, path: &str) -> String {
    format!("{api_base}{path}")
}

/// Caller headers plus `Authorization: Bearer <token>` when `token` is non-empty.
///
/// The bearer header replaces any caller `Authorization`, whatever its casing.
///
/// # Errors
///
/// Returns [`ApiError::InvalidHeader`] for a header name or value that is not
/// valid HTTP.
pub fn build_headers(caller: &BTreeMap<String, String>, token: &str) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::with_capacity(caller.len() + 1);
    for (name, value) in caller {
        let invalid = || ApiError::InvalidHeader { name: name.clone() };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        headers.insert(header_name, header_value);
    }

    if !token.is_empty() {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ApiError::InvalidHeader { name: AUTHORIZATION.to_string() })?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
    }

    Ok(headers)
}
