use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Item, ItemInput};
use super::repository::ItemRepository;
use crate::errors::ServiceError;

/// Message returned when an item name is already taken.
pub fn duplicate_item_message(name: &str) -> String {
    format!("An item with name '{}' already exists.", name)
}

/// Item business service independent of web framework
pub struct ItemService<R: ItemRepository> {
    repo: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get(&self, name: &str) -> Result<Option<Item>, ServiceError> {
        self.repo.find_by_name(name).await
    }

    /// Create a new item; names are globally unique.
    ///
    /// # Examples
    /// ```
    /// use service::item::{ItemService, domain::ItemInput, repository::mock::MockItemRepository};
    /// use std::sync::Arc;
    /// let svc = ItemService::new(Arc::new(MockItemRepository::default()));
    /// let item = tokio_test::block_on(svc.create("test", ItemInput { price: 1.1, store_id: 1 })).unwrap();
    /// assert_eq!(item.price, 1.1);
    /// let dup = tokio_test::block_on(svc.create("test", ItemInput { price: 1.1, store_id: 1 }));
    /// assert_eq!(dup.unwrap_err().to_string(), "An item with name 'test' already exists.");
    /// ```
    #[instrument(skip(self, input), fields(price = input.price, store_id = input.store_id))]
    pub async fn create(&self, name: &str, input: ItemInput) -> Result<Item, ServiceError> {
        if self.repo.find_by_name(name).await?.is_some() {
            debug!("item exists");
            return Err(ServiceError::Conflict(duplicate_item_message(name)));
        }
        // A concurrent insert can still win the race; the UNIQUE constraint reports it.
        let item = self
            .repo
            .create(name, input.price, input.store_id)
            .await
            .map_err(|e| match e {
                ServiceError::Conflict(_) => ServiceError::Conflict(duplicate_item_message(name)),
                other => other,
            })?;
        info!(item_id = item.id, "item_created");
        Ok(item)
    }

    /// Create the item if absent, otherwise overwrite its price.
    /// The stored `store_id` of an existing item is kept.
    #[instrument(skip(self, input), fields(price = input.price, store_id = input.store_id))]
    pub async fn upsert(&self, name: &str, input: ItemInput) -> Result<Item, ServiceError> {
        match self.repo.find_by_name(name).await? {
            Some(_) => {
                let item = self.repo.update_price(name, input.price).await?;
                info!(item_id = item.id, "item_price_updated");
                Ok(item)
            }
            None => match self.repo.create(name, input.price, input.store_id).await {
                Ok(item) => {
                    info!(item_id = item.id, "item_created_by_put");
                    Ok(item)
                }
                // A concurrent insert took the name first; the row now exists, so update it.
                Err(ServiceError::Conflict(_)) => {
                    debug!("insert lost to a concurrent create; updating price");
                    let item = self.repo.update_price(name, input.price).await?;
                    info!(item_id = item.id, "item_price_updated");
                    Ok(item)
                }
                Err(e) => Err(e),
            },
        }
    }

    /// Remove the item if present. Returns whether a row was deleted.
    #[instrument(skip(self))]
    pub async fn delete(&self, name: &str) -> Result<bool, ServiceError> {
        let removed = self.repo.delete(name).await?;
        debug!(removed, "item_delete");
        Ok(removed)
    }

    pub async fn list(&self) -> Result<Vec<Item>, ServiceError> {
        self.repo.list().await
    }
}
