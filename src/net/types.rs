//! Wire DTOs for the DealerMate REST API and the client's error type.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON bodies so serde needs no renames,
//! except where the backend uses an enum (`DealStatus`). Open-ended payloads
//! produced by backend tools (filter options, search results, assistant
//! results) stay as `serde_json::Value`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum length of a saved quick question, in characters.
pub const QUICK_QUESTION_MAX_CHARS: usize = 240;

/// Default number of listings requested by a filtered search.
pub const DEFAULT_SEARCH_TOP_K: u32 = 50;

// =============================================================================
// AUTH
// =============================================================================

/// Identity of the signed-in employee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Role label as issued by the backend (e.g. `"dealer"`).
    pub role: String,
    /// Branch the employee belongs to.
    pub branch_id: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub employee_id: String,
    pub password: String,
}

/// Response of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub name: String,
    pub role: String,
    pub branch_id: String,
}

fn default_token_type() -> String {
    "Bearer".to_owned()
}

impl LoginResponse {
    /// Split the response into the token and the profile it authenticates.
    #[must_use]
    pub fn into_parts(self) -> (String, Profile) {
        let profile = Profile { name: self.name, role: self.role, branch_id: self.branch_id };
        (self.access_token, profile)
    }
}

// =============================================================================
// DEALS
// =============================================================================

/// Pipeline stage of a deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStatus {
    New,
    Qualifying,
    Recommending,
    Negotiating,
    FollowUp,
    Contracted,
    Lost,
}

/// A deal owned by the signed-in employee, as listed by `GET /deals`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: i64,
    /// Pseudonymous customer reference.
    pub customer_token: String,
    pub status: DealStatus,
    /// Free-form customer preferences captured during qualification.
    #[serde(default)]
    pub preference: Value,
    /// ISO-8601 timestamp of the last change.
    pub updated_at: String,
}

// =============================================================================
// QUICK QUESTIONS
// =============================================================================

/// A saved prompt shortcut.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickQuestion {
    pub id: i64,
    pub text: String,
    pub created_at: String,
}

/// Body of `POST /quick-questions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuickQuestion {
    pub text: String,
}

/// Acknowledgement returned by delete routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

// =============================================================================
// FILTERS
// =============================================================================

/// Body of `POST /filters/search`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterSearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default)]
    pub filters: serde_json::Map<String, Value>,
    pub top_k: u32,
}

impl Default for FilterSearchRequest {
    fn default() -> Self {
        Self { query: None, filters: serde_json::Map::new(), top_k: DEFAULT_SEARCH_TOP_K }
    }
}

// =============================================================================
// ASSISTANT
// =============================================================================

/// Body of `POST /assistant/assist`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<i64>,
    pub message: String,
}

/// Assistant reply: the routed intent, the tools consulted, and their output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssistResponse {
    pub intent: String,
    #[serde(default)]
    pub used_tools: Vec<String>,
    pub result: Value,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Failure of a dispatched request.
///
/// Every variant is a transport failure from the caller's point of view; the
/// variants only record where it happened.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// A caller-supplied header name or value is not valid HTTP.
    #[error("invalid header `{name}`")]
    InvalidHeader { name: String },

    /// Input rejected before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The request exceeded its per-request timeout.
    #[error("request timed out")]
    Timeout,

    /// The request was aborted through its cancellation token.
    #[error("request cancelled")]
    Cancelled,

    /// The backend returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of a `Status` error, if that is what this is.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
