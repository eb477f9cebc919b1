//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod password;
pub mod sweet;
pub mod user;

pub use password::Password;
pub use sweet::{Sweet, SweetFields, SweetFilter};
pub use user::{User, UserResponse, UserRole};
