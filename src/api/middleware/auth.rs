//! Bearer-token identity resolution and the access policy.
//!
//! `CurrentUser` is an extractor: protected handlers declare it as a
//! parameter and identity resolution runs before the handler body, so
//! an unauthenticated call is rejected before any store mutation.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::UserRole;
use crate::errors::AppError;

/// Authenticated user resolved from the bearer token.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
}

impl CurrentUser {
    /// Check if user has admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A missing or non-Bearer credential is rejected with 403,
        // matching the original HTTP contract; an invalid token is 401.
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::Forbidden)?;

        let token = auth_header
            .strip_prefix(BEARER_TOKEN_PREFIX)
            .ok_or(AppError::Forbidden)?;

        let user = state.auth_service.authenticate(token).await?;

        Ok(CurrentUser {
            id: user.id,
            email: user.email,
            role: user.role,
        })
    }
}

/// Access policy: require admin role, `Forbidden` otherwise.
///
/// `UserRole::User` may perform any authenticated operation that does
/// not call this; there are no per-resource ACLs.
pub fn require_admin(user: &CurrentUser) -> Result<(), AppError> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_user(role: UserRole) -> CurrentUser {
        CurrentUser {
            id: 1,
            email: "test@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn admin_passes_policy() {
        assert!(require_admin(&current_user(UserRole::Admin)).is_ok());
    }

    #[test]
    fn standard_user_is_forbidden() {
        let result = require_admin(&current_user(UserRole::User));
        assert!(matches!(result, Err(AppError::Forbidden)));
    }
}
