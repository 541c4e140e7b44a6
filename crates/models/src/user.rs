use sea_orm::{entity::prelude::*, ConnectionTrait, DatabaseConnection, Set, TransactionTrait};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, user_credentials};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_username(username: &str) -> Result<(), errors::ModelError> {
    if username.trim().is_empty() { return Err(errors::ModelError::Validation("username required".into())); }
    if username.chars().count() > 80 { return Err(errors::ModelError::Validation("username longer than 80 characters".into())); }
    Ok(())
}

pub async fn find_by_username(db: &DatabaseConnection, username: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::Username.eq(username)).one(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn create<C: ConnectionTrait>(db: &C, username: &str) -> Result<Model, errors::ModelError> {
    validate_username(username)?;
    let am = ActiveModel {
        username: Set(username.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Insert the user and its password hash in one transaction, so a failed
/// credentials write leaves no user row behind.
pub async fn create_with_password(
    db: &DatabaseConnection,
    username: &str,
    password_hash: String,
    algorithm: &str,
) -> Result<(Model, user_credentials::Model), errors::ModelError> {
    let txn = db.begin().await?;
    let inserted = async {
        let user = create(&txn, username).await?;
        let creds = user_credentials::upsert_password(&txn, user.id, password_hash, algorithm).await?;
        Ok::<_, errors::ModelError>((user, creds))
    }
    .await;
    match inserted {
        Ok(rows) => {
            txn.commit().await?;
            Ok(rows)
        }
        Err(e) => {
            txn.rollback().await?;
            Err(e)
        }
    }
}
