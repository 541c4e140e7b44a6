use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::domain::Store;
use crate::errors::ServiceError;
use crate::item::domain::Item;

#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Store>, ServiceError>;
    async fn create(&self, name: &str) -> Result<Store, ServiceError>;
    async fn delete(&self, name: &str) -> Result<bool, ServiceError>;
    async fn list(&self) -> Result<Vec<Store>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmStoreRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStoreRepository {
    async fn with_items(&self, m: models::store::Model) -> Result<Store, ServiceError> {
        let items = models::store::items(&self.db, &m).await?;
        Ok(Store { id: m.id, name: m.name, items: items.into_iter().map(Item::from).collect() })
    }
}

#[async_trait]
impl StoreRepository for SeaOrmStoreRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Store>, ServiceError> {
        match models::store::find_by_name(&self.db, name).await? {
            Some(m) => Ok(Some(self.with_items(m).await?)),
            None => Ok(None),
        }
    }

    async fn create(&self, name: &str) -> Result<Store, ServiceError> {
        let m = models::store::create(&self.db, name).await?;
        Ok(Store { id: m.id, name: m.name, items: Vec::new() })
    }

    async fn delete(&self, name: &str) -> Result<bool, ServiceError> {
        Ok(models::store::delete_by_name(&self.db, name).await?)
    }

    async fn list(&self) -> Result<Vec<Store>, ServiceError> {
        let mut out = Vec::new();
        for m in models::store::list(&self.db).await? {
            out.push(self.with_items(m).await?);
        }
        Ok(out)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockStoreRepository {
        stores: Mutex<Vec<Store>>,
    }

    impl MockStoreRepository {
        fn with_stores<T>(&self, f: impl FnOnce(&mut Vec<Store>) -> T) -> Result<T, ServiceError> {
            let mut stores = self.stores.lock().map_err(|_| ServiceError::Db("mock lock poisoned".into()))?;
            Ok(f(&mut stores))
        }
    }

    #[async_trait]
    impl StoreRepository for MockStoreRepository {
        async fn find_by_name(&self, name: &str) -> Result<Option<Store>, ServiceError> {
            self.with_stores(|stores| stores.iter().find(|s| s.name == name).cloned())
        }

        async fn create(&self, name: &str) -> Result<Store, ServiceError> {
            models::store::validate_name(name)?;
            self.with_stores(|stores| {
                if stores.iter().any(|s| s.name == name) {
                    return Err(ServiceError::Conflict(format!("UNIQUE constraint failed: store.name ({name})")));
                }
                let id = stores.iter().map(|s| s.id).max().unwrap_or(0) + 1;
                let store = Store { id, name: name.to_string(), items: Vec::new() };
                stores.push(store.clone());
                Ok(store)
            })?
        }

        async fn delete(&self, name: &str) -> Result<bool, ServiceError> {
            self.with_stores(|stores| {
                let before = stores.len();
                stores.retain(|s| s.name != name);
                stores.len() != before
            })
        }

        async fn list(&self) -> Result<Vec<Store>, ServiceError> {
            self.with_stores(|stores| stores.clone())
        }
    }
}
