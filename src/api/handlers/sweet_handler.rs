//! Sweet handlers - catalog CRUD and search endpoints.
//!
//! Reads are public; writes require an authenticated admin.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::{
    extractors::{format_validation_errors, ValidatedJson},
    middleware::{require_admin, CurrentUser},
    AppState,
};
use crate::domain::{Sweet, SweetFields, SweetFilter};
use crate::errors::{AppError, AppResult};

/// Catalog route definitions. `GET /` and `GET /search` are public;
/// the write routes resolve `CurrentUser` per handler.
pub fn sweet_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sweets).post(create_sweet))
        .route("/search", get(search_sweets))
        .route("/:id", put(update_sweet).delete(delete_sweet))
}

/// Request body for creating or replacing a sweet.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SweetRequest {
    /// Sweet name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[schema(example = "Dark Chocolate Truffle")]
    pub name: String,
    /// Category label
    #[validate(length(min = 1, message = "Category must not be empty"))]
    #[schema(example = "chocolate")]
    pub category: String,
    /// Unit price, strictly positive
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    #[schema(example = 2.5)]
    pub price: f64,
    /// Stock on hand, never negative
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    #[schema(example = 100)]
    pub quantity: i32,
}

impl From<SweetRequest> for SweetFields {
    fn from(req: SweetRequest) -> Self {
        SweetFields {
            name: req.name,
            category: req.category,
            price: req.price,
            quantity: req.quantity,
        }
    }
}

/// Search query parameters; all optional, combined conjunctively.
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
pub struct SweetSearchParams {
    /// Case-insensitive substring match on name
    pub name: Option<String>,
    /// Exact category match
    pub category: Option<String>,
    /// Inclusive lower price bound
    #[validate(range(min = 0.0, message = "min_price must not be negative"))]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    #[validate(range(min = 0.0, message = "max_price must not be negative"))]
    pub max_price: Option<f64>,
}

impl From<SweetSearchParams> for SweetFilter {
    fn from(params: SweetSearchParams) -> Self {
        // Empty-string filters are treated as absent.
        let non_empty = |s: Option<String>| s.filter(|v| !v.is_empty());
        SweetFilter {
            name: non_empty(params.name),
            category: non_empty(params.category),
            min_price: params.min_price,
            max_price: params.max_price,
        }
    }
}

/// List all sweets.
#[utoipa::path(
    get,
    path = "/api/sweets",
    tag = "sweets",
    responses(
        (status = 200, description = "All sweets", body = Vec<Sweet>),
    )
)]
pub async fn list_sweets(State(state): State<AppState>) -> AppResult<Json<Vec<Sweet>>> {
    let sweets = state.sweet_service.list().await?;
    Ok(Json(sweets))
}

/// Search sweets by name, category and price range.
#[utoipa::path(
    get,
    path = "/api/sweets/search",
    tag = "sweets",
    params(SweetSearchParams),
    responses(
        (status = 200, description = "Matching sweets", body = Vec<Sweet>),
        (status = 422, description = "Validation error"),
    )
)]
pub async fn search_sweets(
    State(state): State<AppState>,
    Query(params): Query<SweetSearchParams>,
) -> AppResult<Json<Vec<Sweet>>> {
    params
        .validate()
        .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

    let sweets = state.sweet_service.search(params.into()).await?;
    Ok(Json(sweets))
}

/// Create a new sweet (admin only).
#[utoipa::path(
    post,
    path = "/api/sweets",
    tag = "sweets",
    security(("bearer_auth" = [])),
    request_body = SweetRequest,
    responses(
        (status = 201, description = "Sweet created", body = Sweet),
        (status = 401, description = "Invalid token"),
        (status = 403, description = "Admin access required"),
        (status = 422, description = "Validation error"),
    )
)]
pub async fn create_sweet(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<SweetRequest>,
) -> AppResult<impl IntoResponse> {
    require_admin(&user)?;

    let sweet = state.sweet_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(sweet)))
}

/// Replace an existing sweet's details (admin only).
#[utoipa::path(
    put,
    path = "/api/sweets/{id}",
    tag = "sweets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Sweet id")),
    request_body = SweetRequest,
    responses(
        (status = 200, description = "Sweet updated", body = Sweet),
        (status = 401, description = "Invalid token"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Sweet not found"),
        (status = 422, description = "Validation error"),
    )
)]
pub async fn update_sweet(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<SweetRequest>,
) -> AppResult<Json<Sweet>> {
    require_admin(&user)?;

    let sweet = state.sweet_service.update(id, payload.into()).await?;
    Ok(Json(sweet))
}

/// Delete a sweet (admin only).
#[utoipa::path(
    delete,
    path = "/api/sweets/{id}",
    tag = "sweets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Sweet id")),
    responses(
        (status = 204, description = "Sweet deleted"),
        (status = 401, description = "Invalid token"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Sweet not found"),
    )
)]
pub async fn delete_sweet(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;

    state.sweet_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
