use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::routes::{
    auth::{TokenBody, UserPayload},
    items::{ItemBody, ItemList, ItemPayload},
    stores::{StoreBody, StoreList},
};

#[derive(ToSchema)]
pub struct HealthDoc { pub status: String }

/// `{"message": "..."}`
#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct UnauthorizedDoc {
    pub description: String,
    pub error: String,
    pub status_code: u16,
}

/// Registers the `Authorization: JWT <token>` scheme referenced by protected paths.
struct JwtSecurity;

impl Modify for JwtSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "jwt",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::items::get_item,
        crate::routes::items::create_item,
        crate::routes::items::put_item,
        crate::routes::items::delete_item,
        crate::routes::items::list_items,
        crate::routes::stores::get_store,
        crate::routes::stores::create_store,
        crate::routes::stores::delete_store,
        crate::routes::stores::list_stores,
    ),
    components(
        schemas(
            HealthDoc,
            MessageDoc,
            UnauthorizedDoc,
            UserPayload,
            TokenBody,
            ItemPayload,
            ItemBody,
            ItemList,
            StoreBody,
            StoreList,
        )
    ),
    modifiers(&JwtSecurity),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "items"),
        (name = "stores")
    )
)]
pub struct ApiDoc;
