//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{AuthService, InventoryService, Services, SweetService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Sweet (catalog) service
    pub sweet_service: Arc<dyn SweetService>,
    /// Inventory service
    pub inventory_service: Arc<dyn InventoryService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: crate::config::Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        use crate::services::ServiceContainer;
        Self {
            auth_service: container.auth(),
            sweet_service: container.sweets(),
            inventory_service: container.inventory(),
            database,
        }
    }

    /// Create application state with manually injected services
    /// (used by tests to substitute mock services).
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        sweet_service: Arc<dyn SweetService>,
        inventory_service: Arc<dyn InventoryService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            sweet_service,
            inventory_service,
            database,
        }
    }
}
