//! Inventory service - the quantity-mutation protocol.
//!
//! The one place with real invariant-checking logic: purchase and
//! restock are guarded delta updates against a single row, so the
//! `quantity >= 0` invariant holds under arbitrary interleaving of
//! concurrent calls on the same sweet.
//!
//! Purchase and restock are deliberately asymmetric: overselling is a
//! correctness violation, over-restocking is not. Purchase therefore has
//! two distinct failure kinds (`OutOfStock` for an empty row,
//! `InsufficientStock` with the exact available quantity otherwise)
//! while restock has none beyond `NotFound`.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Sweet;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Inventory service trait for dependency injection.
///
/// Amount preconditions (`amount > 0`) are enforced at the API boundary;
/// a violation there is a client input error, not a mutator concern.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Decrease quantity by `amount`, rejecting any mutation that would
    /// drive it negative.
    async fn purchase(&self, id: i32, amount: i32) -> AppResult<Sweet>;

    /// Increase quantity by `amount`. Restocking an out-of-stock sweet
    /// is the normal recovery path.
    async fn restock(&self, id: i32, amount: i32) -> AppResult<Sweet>;
}

/// Concrete implementation of InventoryService using Unit of Work.
pub struct InventoryManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> InventoryManager<U> {
    /// Create new inventory service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> InventoryService for InventoryManager<U> {
    async fn purchase(&self, id: i32, amount: i32) -> AppResult<Sweet> {
        let sweets = self.uow.sweets();

        // Single conditional update: only succeeds while quantity >= amount,
        // so a concurrent purchase can never pass the check against a
        // stale quantity.
        let rows = sweets.decrement_quantity(id, amount).await?;

        if rows == 0 {
            // Nothing was touched; re-read to classify the failure.
            let sweet = sweets.find_by_id(id).await?.ok_or_not_found()?;

            if sweet.quantity == 0 {
                return Err(AppError::OutOfStock);
            }
            return Err(AppError::InsufficientStock {
                available: sweet.quantity,
            });
        }

        // The confirming re-read is not part of the mutation. A delete
        // that lands between the decrement and this read surfaces as
        // NotFound even though the purchase committed; the stock itself
        // stays consistent.
        sweets.find_by_id(id).await?.ok_or_not_found()
    }

    async fn restock(&self, id: i32, amount: i32) -> AppResult<Sweet> {
        let sweets = self.uow.sweets();

        let rows = sweets.increment_quantity(id, amount).await?;
        if rows == 0 {
            return Err(AppError::NotFound);
        }

        sweets.find_by_id(id).await?.ok_or_not_found()
    }
}
