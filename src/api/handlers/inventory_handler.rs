//! Inventory handlers - purchase and restock endpoints.
//!
//! Purchase is open to any authenticated user; restock is admin only.

use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::{
    extractors::ValidatedJson,
    middleware::{require_admin, CurrentUser},
    AppState,
};
use crate::domain::Sweet;
use crate::errors::AppResult;

/// Inventory route definitions, merged under the sweets prefix.
pub fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/purchase", post(purchase_sweet))
        .route("/:id/restock", post(restock_sweet))
}

/// Request body for purchase and restock: how many units to move.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct InventoryOperation {
    /// Units to purchase or restock, at least 1
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 3)]
    pub quantity: i32,
}

/// Inventory mutation response: the updated sweet plus a human-readable
/// confirmation message.
#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryResponse {
    /// Sweet id
    pub id: i32,
    /// Sweet name
    pub name: String,
    /// Category label
    pub category: String,
    /// Unit price
    pub price: f64,
    /// Quantity after the mutation
    pub quantity: i32,
    /// Confirmation message
    #[schema(example = "Successfully purchased 3 units of Dark Chocolate Truffle")]
    pub message: String,
}

impl InventoryResponse {
    fn new(sweet: Sweet, message: String) -> Self {
        Self {
            id: sweet.id,
            name: sweet.name,
            category: sweet.category,
            price: sweet.price,
            quantity: sweet.quantity,
            message,
        }
    }
}

/// Purchase units of a sweet, decreasing its stock.
#[utoipa::path(
    post,
    path = "/api/sweets/{id}/purchase",
    tag = "inventory",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Sweet id")),
    request_body = InventoryOperation,
    responses(
        (status = 200, description = "Purchase successful", body = InventoryResponse),
        (status = 400, description = "Out of stock or insufficient stock"),
        (status = 401, description = "Invalid token"),
        (status = 404, description = "Sweet not found"),
        (status = 422, description = "Validation error"),
    )
)]
pub async fn purchase_sweet(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<InventoryOperation>,
) -> AppResult<Json<InventoryResponse>> {
    let sweet = state
        .inventory_service
        .purchase(id, payload.quantity)
        .await?;

    let message = format!(
        "Successfully purchased {} units of {}",
        payload.quantity, sweet.name
    );
    Ok(Json(InventoryResponse::new(sweet, message)))
}

/// Restock units of a sweet, increasing its stock (admin only).
#[utoipa::path(
    post,
    path = "/api/sweets/{id}/restock",
    tag = "inventory",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Sweet id")),
    request_body = InventoryOperation,
    responses(
        (status = 200, description = "Restock successful", body = InventoryResponse),
        (status = 401, description = "Invalid token"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Sweet not found"),
        (status = 422, description = "Validation error"),
    )
)]
pub async fn restock_sweet(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<InventoryOperation>,
) -> AppResult<Json<InventoryResponse>> {
    require_admin(&user)?;

    let sweet = state
        .inventory_service
        .restock(id, payload.quantity)
        .await?;

    let message = format!(
        "Successfully restocked {} units of {}",
        payload.quantity, sweet.name
    );
    Ok(Json(InventoryResponse::new(sweet, message)))
}
