use serde::{Deserialize, Serialize};

/// Domain item (business view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub store_id: i32,
}

/// Fields supplied by callers when creating or replacing an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemInput {
    pub price: f64,
    pub store_id: i32,
}

impl From<models::item::Model> for Item {
    fn from(m: models::item::Model) -> Self {
        Self { id: m.id, name: m.name, price: m.price, store_id: m.store_id }
    }
}
