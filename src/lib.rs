//! # dealermate-client
//!
//! Client shell for the DealerMate sales-assistant API: resolves the backend
//! base URL, holds the signed-in employee's token and profile, and dispatches
//! requests with the bearer token attached.

pub mod config;
pub mod net;
pub mod state;

pub use config::ClientConfig;
pub use net::api::ApiClient;
pub use net::request::RequestOptions;
pub use net::types::{ApiError, Profile};
pub use state::auth::{AuthState, AuthStore};
