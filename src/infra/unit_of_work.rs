//! Unit of Work - centralized repository access.
//!
//! Each HTTP request performs a single-step mapping to one repository
//! call; cross-aggregate transactions are not needed. Quantity mutations
//! rely on atomic conditional updates inside the sweet repository instead
//! of explicit transactions.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{SweetRepository, SweetStore, UserRepository, UserStore};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get sweet repository
    fn sweets(&self) -> Arc<dyn SweetRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    sweet_repo: Arc<SweetStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let sweet_repo = Arc::new(SweetStore::new(db));
        Self {
            user_repo,
            sweet_repo,
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn sweets(&self) -> Arc<dyn SweetRepository> {
        self.sweet_repo.clone()
    }
}
