//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, inventory_handler, sweet_handler};
use crate::domain::{Sweet, UserResponse, UserRole};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Sweet Shop API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sweet Shop API",
        version = "1.0.0",
        description = "Sweet shop inventory backend with JWT authentication, catalog management and stock control",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // Catalog endpoints
        sweet_handler::list_sweets,
        sweet_handler::search_sweets,
        sweet_handler::create_sweet,
        sweet_handler::update_sweet,
        sweet_handler::delete_sweet,
        // Inventory endpoints
        inventory_handler::purchase_sweet,
        inventory_handler::restock_sweet,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            Sweet,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            TokenResponse,
            // Catalog and inventory types
            sweet_handler::SweetRequest,
            inventory_handler::InventoryOperation,
            inventory_handler::InventoryResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "User registration and login"),
        (name = "sweets", description = "Catalog management and search"),
        (name = "inventory", description = "Purchase and restock operations")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}
