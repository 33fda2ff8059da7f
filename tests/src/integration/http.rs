//! # HTTP End-to-End
//!
//! Drives the gateway router built over a real runtime container, so every
//! request crosses handler, service, bridge and store.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sl_04_api_gateway::{build_router, CorsConfig};
use tower::ServiceExt;

use super::fixtures::container;

fn app() -> Router {
    build_router(container().app_state(), &CorsConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn test_stock_follows_resupply_and_orders() {
    let app = app();

    let tomato = json!({
        "sku": "SKU-1",
        "name": "Tomato",
        "stock": 10,
        "price": "0.80",
        "expiry_date": "2026-11-01",
        "unit": "kgs",
        "threshold": 12
    });
    let (status, _) = send(&app, Method::POST, "/add-ingredient", Some(tomato)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, Method::GET, "/get-low-stock-ingredients", None).await;
    assert_eq!(body[0]["sku"], "SKU-1");

    let (status, body) = send(
        &app,
        Method::POST,
        "/resupply-ingredient-add",
        Some(json!([{ "sku": "SKU-1", "stock": 10 }])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcomes"][0]["stock"], 20);
    assert_eq!(body["outcomes"][0]["orders"], 2);

    let (_, body) = send(&app, Method::GET, "/get-low-stock-ingredients", None).await;
    assert!(body.as_array().unwrap().is_empty());

    let dish = json!({
        "name": "Gazpacho",
        "ingredients": [{ "name": "Tomato", "amount": "1.5" }],
        "price": "7.00",
        "category": "Appetizers"
    });
    let (status, body) = send(&app, Method::POST, "/add-menu-item", Some(dish)).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();

    let mut orders = serde_json::Map::new();
    orders.insert(id.clone(), json!({ "count": 3 }));
    let (status, body) = send(&app, Method::POST, "/submit-orders", Some(Value::Object(orders))).await;
    assert_eq!(status, StatusCode::OK);
    // 3 * 1.5 = 4.5 rounds up to 5.
    assert_eq!(body["remaining_stock"]["Tomato"], 15);
    assert!(body["skipped_ingredients"].as_array().unwrap().is_empty());

    let (_, body) = send(&app, Method::GET, "/get-ingredient?sku=SKU-1", None).await;
    assert_eq!(body["stock"], 15);
    assert_eq!(body["orders"], 2);

    let uri = format!("/get-menu-item?id={}", id);
    let (_, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(body["orders"], 3);
}

#[tokio::test]
async fn test_health_is_ok_over_memory_stores() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
}
