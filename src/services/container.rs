//! Service Container - Centralized service access.
//!
//! Provides a single construction point for all application services,
//! wired to the Unit of Work over one database connection.

use std::sync::Arc;

use super::{AuthService, InventoryService, SweetService};
use crate::config::Config;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get sweet (catalog) service
    fn sweets(&self) -> Arc<dyn SweetService>;

    /// Get inventory service
    fn inventory(&self) -> Arc<dyn InventoryService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    sweet_service: Arc<dyn SweetService>,
    inventory_service: Arc<dyn InventoryService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        sweet_service: Arc<dyn SweetService>,
        inventory_service: Arc<dyn InventoryService>,
    ) -> Self {
        Self {
            auth_service,
            sweet_service,
            inventory_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{Authenticator, InventoryManager, SweetManager};

        let uow = Arc::new(Persistence::new(db));
        let auth_service = Arc::new(Authenticator::new(uow.clone(), config));
        let sweet_service = Arc::new(SweetManager::new(uow.clone()));
        let inventory_service = Arc::new(InventoryManager::new(uow));

        Self {
            auth_service,
            sweet_service,
            inventory_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn sweets(&self) -> Arc<dyn SweetService> {
        self.sweet_service.clone()
    }

    fn inventory(&self) -> Arc<dyn InventoryService> {
        self.inventory_service.clone()
    }
}
