use sea_orm::{entity::prelude::*, QueryOrder, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::store;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub price: f64,
    pub store_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Store,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Store => Entity::belongs_to(store::Entity).from(Column::StoreId).to(store::Column::Id).into() }
    }
}

impl Related<store::Entity> for Entity {
    fn to() -> RelationDef { Relation::Store.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("item name required".into())); }
    if name.chars().count() > 80 { return Err(errors::ModelError::Validation("item name longer than 80 characters".into())); }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), errors::ModelError> {
    if !price.is_finite() { return Err(errors::ModelError::Validation("price must be a finite number".into())); }
    Ok(())
}

pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::Name.eq(name)).one(db).await?)
}

pub async fn create(db: &DatabaseConnection, name: &str, price: f64, store_id: i32) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_price(price)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(name.to_string()),
        price: Set(price),
        store_id: Set(store_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Overwrite the price of an existing row; other columns are left untouched.
pub async fn update_price(db: &DatabaseConnection, existing: Model, price: f64) -> Result<Model, errors::ModelError> {
    validate_price(price)?;
    let mut am: ActiveModel = existing.into();
    am.price = Set(price);
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

/// Returns `true` when a row was removed.
pub async fn delete_by_name(db: &DatabaseConnection, name: &str) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_many().filter(Column::Name.eq(name)).exec(db).await?;
    Ok(res.rows_affected > 0)
}
