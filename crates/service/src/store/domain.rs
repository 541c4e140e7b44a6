use serde::{Deserialize, Serialize};

use crate::item::domain::Item;

/// Domain store together with the items it owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: i32,
    pub name: String,
    pub items: Vec<Item>,
}
