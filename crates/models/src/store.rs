use sea_orm::{entity::prelude::*, QueryOrder, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::item;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "store")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Item,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Item => Entity::has_many(item::Entity).into() }
    }
}

impl Related<item::Entity> for Entity {
    fn to() -> RelationDef { Relation::Item.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("store name required".into())); }
    if name.chars().count() > 80 { return Err(errors::ModelError::Validation("store name longer than 80 characters".into())); }
    Ok(())
}

pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::Name.eq(name)).one(db).await?)
}

pub async fn create(db: &DatabaseConnection, name: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

/// Items belonging to the store, oldest first.
pub async fn items(db: &DatabaseConnection, store: &Model) -> Result<Vec<item::Model>, errors::ModelError> {
    Ok(store.find_related(item::Entity).order_by_asc(item::Column::Id).all(db).await?)
}

/// Returns `true` when a row was removed.
pub async fn delete_by_name(db: &DatabaseConnection, name: &str) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_many().filter(Column::Name.eq(name)).exec(db).await?;
    Ok(res.rows_affected > 0)
}
