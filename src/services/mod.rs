//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, with repository access through the Unit of Work.

mod auth_service;
pub mod container;
mod inventory_service;
mod sweet_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use inventory_service::{InventoryManager, InventoryService};
pub use sweet_service::{SweetManager, SweetService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
