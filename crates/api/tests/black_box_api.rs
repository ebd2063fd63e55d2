use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::StatusCode;
use serde_json::json;

use stockgrid_api::config::AppConfig;
use stockgrid_auth::{JwtClaims, Role};
use stockgrid_core::UserId;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(jwt_secret: &str) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = stockgrid_api::app::build_app(AppConfig::new(jwt_secret));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn mint_jwt(jwt_secret: &str, roles: Vec<Role>) -> String {
    let now = Utc::now();
    let claims = JwtClaims {
        sub: UserId::new(),
        roles,
        issued_at: now,
        expires_at: now + ChronoDuration::minutes(10),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("failed to encode jwt")
}

async fn create_item(client: &reqwest::Client, base_url: &str, token: &str, sku: &str) -> String {
    let res = client
        .post(format!("{}/items", base_url))
        .bearer_auth(token)
        .json(&json!({
            "sku": sku,
            "name": "Widget",
            "price_cents": 1999,
            "pickup_allowed": true,
            "shipping_allowed": true,
            "delivery_allowed": false
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

async fn create_location(client: &reqwest::Client, base_url: &str, token: &str, name: &str) -> String {
    let res = client
        .post(format!("{}/locations", base_url))
        .bearer_auth(token)
        .json(&json!({
            "name": name,
            "location_type": "DC",
            "pickup_allowed": false,
            "shipping_allowed": true,
            "delivery_allowed": true
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn("test-secret").await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn auth_required_for_protected_endpoints() {
    let srv = TestServer::spawn("test-secret").await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/items", srv.base_url))
        .bearer_auth("not-a-real-token")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_login_whoami_flow() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", srv.base_url))
        .json(&json!({
            "username": "Alice",
            "email": "alice@example.com",
            "password": "hunter2hunter2",
            "roles": ["planner"]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let registered: serde_json::Value = res.json().await.unwrap();
    assert_eq!(registered["username"], "alice");

    let res = client
        .post(format!("{}/auth/login", srv.base_url))
        .json(&json!({ "username": "alice", "password": "hunter2hunter2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let login: serde_json::Value = res.json().await.unwrap();
    let token = login["token"].as_str().unwrap();

    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let whoami: serde_json::Value = res.json().await.unwrap();
    assert_eq!(whoami["user_id"], registered["id"]);
    assert!(whoami["roles"].as_array().unwrap().iter().any(|r| r == "planner"));
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let srv = TestServer::spawn("test-secret").await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", srv.base_url))
        .json(&json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "hunter2hunter2"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    for body in [
        json!({ "username": "bob", "password": "wrong-password" }),
        json!({ "username": "nobody", "password": "hunter2hunter2" }),
    ] {
        let res = client
            .post(format!("{}/auth/login", srv.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn item_lifecycle_create_get_update_delete() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, vec![Role::new("admin")]);
    let client = reqwest::Client::new();

    let id = create_item(&client, &srv.base_url, &token, "SKU-001").await;

    let res = client
        .get(format!("{}/items/{}", srv.base_url, id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let item: serde_json::Value = res.json().await.unwrap();
    assert_eq!(item["sku"], "SKU-001");
    assert_eq!(item["status"], "ACTIVE");

    let res = client
        .put(format!("{}/items/{}", srv.base_url, id))
        .bearer_auth(&token)
        .json(&json!({ "name": "Widget Mk2", "status": "DISCONTINUED" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let item: serde_json::Value = res.json().await.unwrap();
    assert_eq!(item["name"], "Widget Mk2");
    assert_eq!(item["status"], "DISCONTINUED");

    let res = client
        .delete(format!("{}/items/{}", srv.base_url, id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/items/{}", srv.base_url, id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn item_listing_is_paged() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, vec![Role::new("admin")]);
    let client = reqwest::Client::new();

    for i in 0..5 {
        create_item(&client, &srv.base_url, &token, &format!("SKU-{i:03}")).await;
    }

    let res = client
        .get(format!("{}/items?page=1&size=2", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let page: serde_json::Value = res.json().await.unwrap();
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
    assert_eq!(page["page"], 1);
    assert_eq!(page["total_items"], 5);
    assert_eq!(page["total_pages"], 3);
}

#[tokio::test]
async fn invalid_item_is_rejected() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, vec![Role::new("admin")]);
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/items", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "sku": "   ",
            "name": "Widget",
            "price_cents": 100,
            "pickup_allowed": true,
            "shipping_allowed": true,
            "delivery_allowed": true
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn supply_requires_existing_references() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, vec![Role::new("admin")]);
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/supply", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "item_id": uuid::Uuid::now_v7(),
            "location_id": uuid::Uuid::now_v7(),
            "supply_type": "ON_HAND",
            "quantity": 10
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "missing_reference");
}

#[tokio::test]
async fn availability_classifies_against_threshold() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, vec![Role::new("admin")]);
    let client = reqwest::Client::new();

    let item_id = create_item(&client, &srv.base_url, &token, "SKU-AV1").await;
    let location_id = create_location(&client, &srv.base_url, &token, "DC East").await;

    // 100 on hand + 20 in transit, 30 damaged (ignored), 50 hard promised.
    for (supply_type, quantity) in [("ON_HAND", 100), ("IN_TRANSIT", 20), ("DAMAGED", 30)] {
        let res = client
            .post(format!("{}/supply", srv.base_url))
            .bearer_auth(&token)
            .json(&json!({
                "item_id": item_id,
                "location_id": location_id,
                "supply_type": supply_type,
                "quantity": quantity
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = client
        .post(format!("{}/demand", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "item_id": item_id,
            "location_id": location_id,
            "demand_type": "HARD_PROMISED",
            "quantity": 50
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    // No threshold yet: net is known, tier is not.
    let res = client
        .get(format!("{}/availability/{}/at/{}", srv.base_url, item_id, location_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let report: serde_json::Value = res.json().await.unwrap();
    assert_eq!(report["supply_quantity"], 120);
    assert_eq!(report["demand_quantity"], 50);
    assert_eq!(report["net_available"], 70);
    assert_eq!(report["stock_level"], "UNKNOWN");

    let res = client
        .post(format!("{}/thresholds", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "item_id": item_id,
            "location_id": location_id,
            "min_threshold": 10,
            "max_threshold": 60
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    // net 70 > max 60 => GREEN, both per location and network-wide.
    let res = client
        .get(format!("{}/availability/{}/at/{}", srv.base_url, item_id, location_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let report: serde_json::Value = res.json().await.unwrap();
    assert_eq!(report["stock_level"], "GREEN");

    let res = client
        .get(format!("{}/availability/{}", srv.base_url, item_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let report: serde_json::Value = res.json().await.unwrap();
    assert_eq!(report["net_available"], 70);
    assert_eq!(report["stock_level"], "GREEN");
}

#[tokio::test]
async fn availability_for_unknown_item_is_not_found() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, vec![Role::new("admin")]);
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/availability/{}", srv.base_url, uuid::Uuid::now_v7()))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_threshold_conflicts() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, vec![Role::new("admin")]);
    let client = reqwest::Client::new();

    let item_id = create_item(&client, &srv.base_url, &token, "SKU-TH1").await;
    let location_id = create_location(&client, &srv.base_url, &token, "Store 7").await;

    let body = json!({
        "item_id": item_id,
        "location_id": location_id,
        "min_threshold": 5,
        "max_threshold": 50
    });

    let res = client
        .post(format!("{}/thresholds", srv.base_url))
        .bearer_auth(&token)
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/thresholds", srv.base_url))
        .bearer_auth(&token)
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn viewer_cannot_write() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, vec![Role::new("viewer")]);
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/items", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "sku": "SKU-X",
            "name": "Widget",
            "price_cents": 100,
            "pickup_allowed": true,
            "shipping_allowed": true,
            "delivery_allowed": true
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "forbidden");

    // Reads still work.
    let res = client
        .get(format!("{}/items", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn planner_writes_supply_but_not_items() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let admin = mint_jwt(jwt_secret, vec![Role::new("admin")]);
    let planner = mint_jwt(jwt_secret, vec![Role::new("planner")]);
    let client = reqwest::Client::new();

    let item_id = create_item(&client, &srv.base_url, &admin, "SKU-PL1").await;
    let location_id = create_location(&client, &srv.base_url, &admin, "DC West").await;

    let res = client
        .post(format!("{}/supply", srv.base_url))
        .bearer_auth(&planner)
        .json(&json!({
            "item_id": item_id,
            "location_id": location_id,
            "supply_type": "ON_HAND",
            "quantity": 5
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/items", srv.base_url))
        .bearer_auth(&planner)
        .json(&json!({
            "sku": "SKU-PL2",
            "name": "Widget",
            "price_cents": 100,
            "pickup_allowed": true,
            "shipping_allowed": true,
            "delivery_allowed": true
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn dashboard_reports_counts_and_totals() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, vec![Role::new("admin")]);
    let client = reqwest::Client::new();

    let item_id = create_item(&client, &srv.base_url, &token, "SKU-DB1").await;
    let location_id = create_location(&client, &srv.base_url, &token, "DC North").await;

    let res = client
        .post(format!("{}/supply", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "item_id": item_id,
            "location_id": location_id,
            "supply_type": "ON_HAND",
            "quantity": 40
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/demand", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "item_id": item_id,
            "location_id": location_id,
            "demand_type": "PLANNED",
            "quantity": 15
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .get(format!("{}/dashboard", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let dashboard: serde_json::Value = res.json().await.unwrap();
    assert_eq!(dashboard["item_count"], 1);
    assert_eq!(dashboard["location_count"], 1);
    assert_eq!(dashboard["supply_record_count"], 1);
    assert_eq!(dashboard["demand_record_count"], 1);
    assert_eq!(dashboard["supply_totals"]["on_hand"], 40);
    assert_eq!(dashboard["demand_totals"]["planned"], 15);
}
