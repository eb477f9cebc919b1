//! Sweet domain entity - a catalog entry in the shop inventory.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};

/// Sweet domain entity.
///
/// The `quantity >= 0` invariant is protected by the inventory service:
/// quantity is only ever changed through its purchase/restock protocol
/// or by a full-field catalog update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Sweet {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i32,
}

/// Field set for creating or fully replacing a sweet.
#[derive(Debug, Clone, PartialEq)]
pub struct SweetFields {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i32,
}

impl SweetFields {
    /// Enforce catalog field invariants.
    ///
    /// Requests are already validated at the API boundary; the catalog
    /// service re-checks here so the invariants hold no matter who calls it.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() {
            return Err(AppError::validation("Sweet name must not be empty"));
        }
        if self.category.is_empty() {
            return Err(AppError::validation("Sweet category must not be empty"));
        }
        if self.price <= 0.0 {
            return Err(AppError::validation("Price must be greater than 0"));
        }
        if self.quantity < 0 {
            return Err(AppError::validation("Quantity must be non-negative"));
        }
        Ok(())
    }
}

/// Optional, conjunctive search filters.
///
/// An absent filter places no constraint; empty strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct SweetFilter {
    /// Case-insensitive substring match on name
    pub name: Option<String>,
    /// Exact category match
    pub category: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
}
