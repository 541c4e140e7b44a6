use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::domain::Item;
use crate::errors::ServiceError;

/// Repository abstraction for item persistence.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, ServiceError>;
    async fn create(&self, name: &str, price: f64, store_id: i32) -> Result<Item, ServiceError>;
    async fn update_price(&self, name: &str, price: f64) -> Result<Item, ServiceError>;
    /// `Ok(false)` when nothing matched.
    async fn delete(&self, name: &str) -> Result<bool, ServiceError>;
    async fn list(&self) -> Result<Vec<Item>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmItemRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ItemRepository for SeaOrmItemRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, ServiceError> {
        Ok(models::item::find_by_name(&self.db, name).await?.map(Item::from))
    }

    async fn create(&self, name: &str, price: f64, store_id: i32) -> Result<Item, ServiceError> {
        Ok(models::item::create(&self.db, name, price, store_id).await?.into())
    }

    async fn update_price(&self, name: &str, price: f64) -> Result<Item, ServiceError> {
        let existing = models::item::find_by_name(&self.db, name)
            .await?
            .ok_or_else(|| ServiceError::not_found("item"))?;
        Ok(models::item::update_price(&self.db, existing, price).await?.into())
    }

    async fn delete(&self, name: &str) -> Result<bool, ServiceError> {
        Ok(models::item::delete_by_name(&self.db, name).await?)
    }

    async fn list(&self) -> Result<Vec<Item>, ServiceError> {
        Ok(models::item::list(&self.db).await?.into_iter().map(Item::from).collect())
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockItemRepository {
        items: Mutex<Vec<Item>>, // insertion order == id order
    }

    impl MockItemRepository {
        fn with_items<T>(&self, f: impl FnOnce(&mut Vec<Item>) -> T) -> Result<T, ServiceError> {
            let mut items = self.items.lock().map_err(|_| ServiceError::Db("mock lock poisoned".into()))?;
            Ok(f(&mut items))
        }
    }

    #[async_trait]
    impl ItemRepository for MockItemRepository {
        async fn find_by_name(&self, name: &str) -> Result<Option<Item>, ServiceError> {
            self.with_items(|items| items.iter().find(|i| i.name == name).cloned())
        }

        async fn create(&self, name: &str, price: f64, store_id: i32) -> Result<Item, ServiceError> {
            models::item::validate_name(name)?;
            models::item::validate_price(price)?;
            self.with_items(|items| {
                if items.iter().any(|i| i.name == name) {
                    return Err(ServiceError::Conflict(format!("UNIQUE constraint failed: item.name ({name})")));
                }
                let id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
                let item = Item { id, name: name.to_string(), price, store_id };
                items.push(item.clone());
                Ok(item)
            })?
        }

        async fn update_price(&self, name: &str, price: f64) -> Result<Item, ServiceError> {
            models::item::validate_price(price)?;
            self.with_items(|items| match items.iter_mut().find(|i| i.name == name) {
                Some(i) => {
                    i.price = price;
                    Ok(i.clone())
                }
                None => Err(ServiceError::not_found("item")),
            })?
        }

        async fn delete(&self, name: &str) -> Result<bool, ServiceError> {
            self.with_items(|items| {
                let before = items.len();
                items.retain(|i| i.name != name);
                items.len() != before
            })
        }

        async fn list(&self) -> Result<Vec<Item>, ServiceError> {
            self.with_items(|items| items.clone())
        }
    }
}
