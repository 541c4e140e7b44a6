use sea_orm::DatabaseConnection;

use crate::auth::domain::{AuthUser, Credentials};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

fn to_user(u: models::user::Model) -> AuthUser {
    AuthUser { id: u.id, username: u.username }
}

fn to_credentials(c: models::user_credentials::Model) -> Credentials {
    Credentials { user_id: c.user_id, password_hash: c.password_hash, password_algorithm: c.password_algorithm }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<AuthUser>, AuthError> {
        Ok(models::user::find_by_username(&self.db, username).await?.map(to_user))
    }

    async fn find_user_by_id(&self, id: i32) -> Result<Option<AuthUser>, AuthError> {
        Ok(models::user::find_by_id(&self.db, id).await?.map(to_user))
    }

    async fn create_user_with_password(&self, username: &str, password_hash: String, password_algorithm: String) -> Result<AuthUser, AuthError> {
        let (user, _) = models::user::create_with_password(&self.db, username, password_hash, &password_algorithm).await?;
        Ok(to_user(user))
    }

    async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError> {
        Ok(models::user_credentials::find_by_user(&self.db, user_id).await?.map(to_credentials))
    }
}
