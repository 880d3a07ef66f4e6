//! Shared client-side state.
//!
//! Only the auth session lives here; everything else the client touches is
//! fetched on demand through `net::api`.

pub mod auth;
