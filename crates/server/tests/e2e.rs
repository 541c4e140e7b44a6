mod support;

use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = support::build_app().await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });
    Ok(TestApp { base_url: format!("http://{}", addr) })
}

#[tokio::test]
async fn e2e_store_item_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();
    let url = |path: &str| format!("{}{}", app.base_url, path);

    let res = client.get(url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let creds = json!({"username": "test", "password": "1234"});
    let res = client.post(url("/register")).json(&creds).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let token: Value = client.post(url("/auth")).json(&creds).send().await?.json().await?;
    let authz = format!("JWT {}", token["access_token"].as_str().unwrap_or_default());

    let res = client.post(url("/store/test")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = client.post(url("/item/test")).json(&json!({"price": 1.1, "store_id": 1})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = client.get(url("/item/test")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    let res = client.put(url("/item/test")).json(&json!({"price": 2.5, "store_id": 1})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = client.get(url("/item/test")).header("Authorization", &authz).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({"name": "test", "price": 2.5}));

    let body: Value = client.delete(url("/item/test")).send().await?.json().await?;
    assert_eq!(body, json!({"message": "Item deleted"}));

    let res = client.get(url("/item/test")).header("Authorization", &authz).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
