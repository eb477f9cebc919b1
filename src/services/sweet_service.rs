//! Sweet service - catalog business logic.
//!
//! Owns create/read/update/delete/search of catalog entries and
//! enforces the field invariants on every write.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Sweet, SweetFields, SweetFilter};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Sweet service trait for dependency injection.
#[async_trait]
pub trait SweetService: Send + Sync {
    /// Create a new sweet (admin operation, enforced by the API layer)
    async fn create(&self, fields: SweetFields) -> AppResult<Sweet>;

    /// List all sweets
    async fn list(&self) -> AppResult<Vec<Sweet>>;

    /// Search sweets with optional conjunctive filters
    async fn search(&self, filter: SweetFilter) -> AppResult<Vec<Sweet>>;

    /// Full-field update of an existing sweet
    async fn update(&self, id: i32, fields: SweetFields) -> AppResult<Sweet>;

    /// Delete a sweet
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of SweetService using Unit of Work.
pub struct SweetManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> SweetManager<U> {
    /// Create new sweet service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> SweetService for SweetManager<U> {
    async fn create(&self, fields: SweetFields) -> AppResult<Sweet> {
        fields.validate()?;
        self.uow.sweets().create(fields).await
    }

    async fn list(&self) -> AppResult<Vec<Sweet>> {
        self.uow.sweets().list().await
    }

    async fn search(&self, filter: SweetFilter) -> AppResult<Vec<Sweet>> {
        self.uow.sweets().search(filter).await
    }

    async fn update(&self, id: i32, fields: SweetFields) -> AppResult<Sweet> {
        fields.validate()?;
        self.uow
            .sweets()
            .update(id, fields)
            .await?
            .ok_or_not_found()
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if self.uow.sweets().delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockSweetRepository, MockUserRepository, SweetRepository, UserRepository};

    struct TestUnitOfWork {
        users: Arc<MockUserRepository>,
        sweets: Arc<MockSweetRepository>,
    }

    impl TestUnitOfWork {
        fn new(sweets: MockSweetRepository) -> Self {
            Self {
                users: Arc::new(MockUserRepository::new()),
                sweets: Arc::new(sweets),
            }
        }
    }

    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }

        fn sweets(&self) -> Arc<dyn SweetRepository> {
            self.sweets.clone()
        }
    }

    fn candy_fields() -> SweetFields {
        SweetFields {
            name: "Candy".to_string(),
            category: "Sweet".to_string(),
            price: 1.5,
            quantity: 10,
        }
    }

    fn candy(id: i32) -> Sweet {
        Sweet {
            id,
            name: "Candy".to_string(),
            category: "Sweet".to_string(),
            price: 1.5,
            quantity: 10,
        }
    }

    #[tokio::test]
    async fn create_persists_valid_fields() {
        let mut sweets = MockSweetRepository::new();
        sweets.expect_create().returning(|fields| {
            Ok(Sweet {
                id: 1,
                name: fields.name,
                category: fields.category,
                price: fields.price,
                quantity: fields.quantity,
            })
        });

        let service = SweetManager::new(Arc::new(TestUnitOfWork::new(sweets)));
        let sweet = service.create(candy_fields()).await.unwrap();

        assert_eq!(sweet.id, 1);
        assert_eq!(sweet.quantity, 10);
    }

    #[tokio::test]
    async fn create_rejects_invalid_fields_before_store_access() {
        // No expectations registered: a store call would panic the mock.
        let sweets = MockSweetRepository::new();
        let service = SweetManager::new(Arc::new(TestUnitOfWork::new(sweets)));

        let mut fields = candy_fields();
        fields.price = -2.0;
        let result = service.create(fields).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn update_returns_not_found_for_missing_id() {
        let mut sweets = MockSweetRepository::new();
        sweets.expect_update().returning(|_, _| Ok(None));

        let service = SweetManager::new(Arc::new(TestUnitOfWork::new(sweets)));
        let result = service.update(42, candy_fields()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let mut sweets = MockSweetRepository::new();
        sweets
            .expect_update()
            .withf(|id, fields| *id == 1 && fields.name == "Fudge" && fields.quantity == 3)
            .returning(|id, fields| {
                Ok(Some(Sweet {
                    id,
                    name: fields.name,
                    category: fields.category,
                    price: fields.price,
                    quantity: fields.quantity,
                }))
            });

        let service = SweetManager::new(Arc::new(TestUnitOfWork::new(sweets)));
        let updated = service
            .update(
                1,
                SweetFields {
                    name: "Fudge".to_string(),
                    category: "Chocolate".to_string(),
                    price: 2.25,
                    quantity: 3,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Fudge");
        assert_eq!(updated.quantity, 3);
    }

    #[tokio::test]
    async fn delete_returns_not_found_for_missing_id() {
        let mut sweets = MockSweetRepository::new();
        sweets.expect_delete().returning(|_| Ok(false));

        let service = SweetManager::new(Arc::new(TestUnitOfWork::new(sweets)));
        let result = service.delete(42).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn search_passes_filters_through() {
        let mut sweets = MockSweetRepository::new();
        sweets
            .expect_search()
            .withf(|filter| {
                filter.name.as_deref() == Some("choc")
                    && filter.category.as_deref() == Some("Chocolate")
                    && filter.min_price == Some(1.0)
                    && filter.max_price == Some(5.0)
            })
            .returning(|_| Ok(vec![candy(1)]));

        let service = SweetManager::new(Arc::new(TestUnitOfWork::new(sweets)));
        let results = service
            .search(SweetFilter {
                name: Some("choc".to_string()),
                category: Some("Chocolate".to_string()),
                min_price: Some(1.0),
                max_price: Some(5.0),
            })
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn search_with_no_filters_matches_list() {
        let mut sweets = MockSweetRepository::new();
        sweets
            .expect_search()
            .returning(|_| Ok(vec![candy(1), candy(2)]));
        sweets.expect_list().returning(|| Ok(vec![candy(1), candy(2)]));

        let service = SweetManager::new(Arc::new(TestUnitOfWork::new(sweets)));
        let listed = service.list().await.unwrap();
        let searched = service.search(SweetFilter::default()).await.unwrap();

        assert_eq!(listed, searched);
    }
}
