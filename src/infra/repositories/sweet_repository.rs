//! Sweet repository - Catalog store access.
//!
//! Quantity mutations are expressed as guarded delta updates rather than
//! absolute writes, so concurrent purchases against the same row are
//! serialized by the store and can never drive the quantity negative.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::sweet::{self, Entity as SweetEntity};
use crate::domain::{Sweet, SweetFields, SweetFilter};
use crate::errors::{AppError, AppResult};

/// Sweet repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait SweetRepository: Send + Sync {
    /// Find sweet by primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Sweet>>;

    /// List all sweets in insertion order
    async fn list(&self) -> AppResult<Vec<Sweet>>;

    /// Search sweets with conjunctive optional filters
    async fn search(&self, filter: SweetFilter) -> AppResult<Vec<Sweet>>;

    /// Persist a new sweet and return it with its assigned id
    async fn create(&self, fields: SweetFields) -> AppResult<Sweet>;

    /// Full-field replace; `None` if the id does not exist
    async fn update(&self, id: i32, fields: SweetFields) -> AppResult<Option<Sweet>>;

    /// Delete by id; `false` if the id does not exist
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Atomically decrement quantity, guarded by `quantity >= amount`.
    /// Returns the number of rows touched (0 or 1).
    async fn decrement_quantity(&self, id: i32, amount: i32) -> AppResult<u64>;

    /// Atomically increment quantity. Returns the number of rows touched.
    async fn increment_quantity(&self, id: i32, amount: i32) -> AppResult<u64>;
}

/// SeaORM-backed sweet repository.
pub struct SweetStore {
    db: DatabaseConnection,
}

impl SweetStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SweetRepository for SweetStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Sweet>> {
        let result = SweetEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Sweet::from))
    }

    async fn list(&self) -> AppResult<Vec<Sweet>> {
        let models = SweetEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Sweet::from).collect())
    }

    async fn search(&self, filter: SweetFilter) -> AppResult<Vec<Sweet>> {
        let mut query = SweetEntity::find();

        // Case-insensitive substring match; LOWER keeps this portable
        // across Postgres and SQLite.
        if let Some(name) = filter.name.filter(|s| !s.is_empty()) {
            let pattern = format!("%{}%", name.to_lowercase());
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(sweet::Column::Name))).like(pattern),
            );
        }

        if let Some(category) = filter.category.filter(|s| !s.is_empty()) {
            query = query.filter(sweet::Column::Category.eq(category));
        }

        if let Some(min_price) = filter.min_price {
            query = query.filter(sweet::Column::Price.gte(min_price));
        }

        if let Some(max_price) = filter.max_price {
            query = query.filter(sweet::Column::Price.lte(max_price));
        }

        let models = query.all(&self.db).await.map_err(AppError::from)?;

        Ok(models.into_iter().map(Sweet::from).collect())
    }

    async fn create(&self, fields: SweetFields) -> AppResult<Sweet> {
        let active_model = sweet::ActiveModel {
            name: Set(fields.name),
            category: Set(fields.category),
            price: Set(fields.price),
            quantity: Set(fields.quantity),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Sweet::from(model))
    }

    async fn update(&self, id: i32, fields: SweetFields) -> AppResult<Option<Sweet>> {
        let Some(existing) = SweetEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
        else {
            return Ok(None);
        };

        let mut active: sweet::ActiveModel = existing.into();
        active.name = Set(fields.name);
        active.category = Set(fields.category);
        active.price = Set(fields.price);
        active.quantity = Set(fields.quantity);

        let model = active.update(&self.db).await.map_err(AppError::from)?;

        Ok(Some(Sweet::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = SweetEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }

    async fn decrement_quantity(&self, id: i32, amount: i32) -> AppResult<u64> {
        // UPDATE sweets SET quantity = quantity - ? WHERE id = ? AND quantity >= ?
        let result = SweetEntity::update_many()
            .col_expr(
                sweet::Column::Quantity,
                Expr::col(sweet::Column::Quantity).sub(amount),
            )
            .filter(sweet::Column::Id.eq(id))
            .filter(sweet::Column::Quantity.gte(amount))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }

    async fn increment_quantity(&self, id: i32, amount: i32) -> AppResult<u64> {
        let result = SweetEntity::update_many()
            .col_expr(
                sweet::Column::Quantity,
                Expr::col(sweet::Column::Quantity).add(amount),
            )
            .filter(sweet::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
