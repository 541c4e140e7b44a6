use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::Store;
use super::repository::StoreRepository;
use crate::errors::ServiceError;

pub fn duplicate_store_message(name: &str) -> String {
    format!("A store with name '{}' already exists.", name)
}

pub struct StoreService<R: StoreRepository> {
    repo: Arc<R>,
}

impl<R: StoreRepository> StoreService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get(&self, name: &str) -> Result<Option<Store>, ServiceError> {
        self.repo.find_by_name(name).await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, name: &str) -> Result<Store, ServiceError> {
        if self.repo.find_by_name(name).await?.is_some() {
            return Err(ServiceError::Conflict(duplicate_store_message(name)));
        }
        let store = self.repo.create(name).await.map_err(|e| match e {
            ServiceError::Conflict(_) => ServiceError::Conflict(duplicate_store_message(name)),
            other => other,
        })?;
        info!(store_id = store.id, "store_created");
        Ok(store)
    }

    /// Deletes the store and, through the FK cascade, its items.
    #[instrument(skip(self))]
    pub async fn delete(&self, name: &str) -> Result<bool, ServiceError> {
        let removed = self.repo.delete(name).await?;
        if removed {
            info!("store_deleted");
        }
        Ok(removed)
    }

    pub async fn list(&self) -> Result<Vec<Store>, ServiceError> {
        self.repo.list().await
    }
}
