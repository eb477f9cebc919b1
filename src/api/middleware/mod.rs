//! API middleware and access policy.

pub mod auth;

pub use auth::{require_admin, CurrentUser};
