//! HTTP access to the DealerMate backend.
//!
//! DESIGN
//! ======
//! `api` holds the generic dispatcher, `endpoints` the typed routes built on
//! it, `request` the per-call options, and `types` the wire DTOs.

pub mod api;
pub mod endpoints;
pub mod request;
pub mod types;
