//! Typed wrappers over `ApiClient::request` for the DealerMate routes.
//!
//! Every route except `/auth/login` needs a bearer token; the wrappers do not
//! check for one and let the backend answer 401 instead.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use serde_json::Value;

use super::api::ApiClient;
use super::request::RequestOptions;
use super::types::{
    ApiError, AssistRequest, AssistResponse, Deal, FilterSearchRequest, LoginRequest, LoginResponse, NewQuickQuestion,
    OkResponse, Profile, QUICK_QUESTION_MAX_CHARS, QuickQuestion,
};

impl ApiClient {
    // =========================================================================
    // AUTH
    // =========================================================================

    /// Exchange employee credentials for a token and store the session.
    ///
    /// The auth store is only written on success; a rejected login leaves the
    /// previous session in place.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 401 for bad credentials, or any other
    /// dispatch failure.
    pub async fn login(&self, employee_id: &str, password: &str) -> Result<Profile, ApiError> {
        let body = LoginRequest { employee_id: employee_id.to_owned(), password: password.to_owned() };
        let resp: LoginResponse = self.request("/auth/login", RequestOptions::post().json(&body)?).await?;

        let (token, profile) = resp.into_parts();
        self.auth().set_auth(token, profile.clone()).await;
        tracing::info!(role = %profile.role, branch_id = %profile.branch_id, "signed in");
        Ok(profile)
    }

    /// Drop the local session. The backend keeps no session to close.
    pub async fn logout(&self) {
        self.auth().logout().await;
        tracing::info!("signed out");
    }

    // =========================================================================
    // DEALS
    // =========================================================================

    /// Most recently updated deals owned by the signed-in employee.
    ///
    /// # Errors
    ///
    /// Returns any dispatch failure.
    pub async fn list_deals(&self) -> Result<Vec<Deal>, ApiError> {
        self.request("/deals", RequestOptions::get()).await
    }

    // =========================================================================
    // QUICK QUESTIONS
    // =========================================================================

    /// # Errors
    ///
    /// Returns any dispatch failure.
    pub async fn list_quick_questions(&self) -> Result<Vec<QuickQuestion>, ApiError> {
        self.request("/quick-questions", RequestOptions::get()).await
    }

    /// Save a quick question. Surrounding whitespace is trimmed first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] without sending anything when the
    /// trimmed text is empty or longer than 240 characters.
    pub async fn create_quick_question(&self, text: &str) -> Result<QuickQuestion, ApiError> {
        let text = text.trim();
        let len = text.chars().count();
        if len == 0 || len > QUICK_QUESTION_MAX_CHARS {
            return Err(ApiError::InvalidInput(format!(
                "quick question must be 1..={QUICK_QUESTION_MAX_CHARS} characters, got {len}"
            )));
        }
        let body = NewQuickQuestion { text: text.to_owned() };
        self.request("/quick-questions", RequestOptions::post().json(&body)?)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 404 when the question does not exist
    /// or belongs to someone else.
    pub async fn delete_quick_question(&self, id: i64) -> Result<OkResponse, ApiError> {
        let path = format!("/quick-questions/{id}");
        self.request(&path, RequestOptions::delete()).await
    }

    // =========================================================================
    // FILTERS
    // =========================================================================

    /// Facets available for the employee's branch inventory.
    ///
    /// # Errors
    ///
    /// Returns any dispatch failure.
    pub async fn filter_options(&self) -> Result<Value, ApiError> {
        self.request("/filters/options", RequestOptions::get()).await
    }

    /// # Errors
    ///
    /// Returns any dispatch failure.
    pub async fn search_listings(&self, search: &FilterSearchRequest) -> Result<Value, ApiError> {
        self.request("/filters/search", RequestOptions::post().json(search)?)
            .await
    }

    // =========================================================================
    // ASSISTANT
    // =========================================================================

    /// Ask the sales assistant, optionally in the context of a deal.
    ///
    /// # Errors
    ///
    /// Returns any dispatch failure.
    pub async fn assist(&self, ask: &AssistRequest) -> Result<AssistResponse, ApiError> {
        self.request("/assistant/assist", RequestOptions::post().json(ask)?)
            .await
    }
}
