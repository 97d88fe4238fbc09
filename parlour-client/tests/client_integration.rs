// parlour-client/tests/client_integration.rs
// Integration tests against a local mock of the remote ordering service

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use parlour_client::{ClientConfig, ClientError, OrderStatus};
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Bind the router on an ephemeral port and return the endpoint URL
async fn spawn_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/")
}

/// Mock catalog service dispatching on the `action` query parameter
fn catalog_router(calls: Arc<AtomicUsize>) -> Router {
    Router::new().route(
        "/",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                let body = match params.get("action").map(String::as_str) {
                    Some("getCategories") => json!({
                        "status": "success",
                        "categories": [
                            {"name": "Kulfi", "imageURL": "https://img.example/kulfi.jpg"},
                            {"name": "Shakes"}
                        ]
                    }),
                    Some("getAllProducts") => json!({
                        "status": "success",
                        "products": [{
                            "id": 1, "name": "Vanilla", "price": 50.0,
                            "category": "Shakes", "type": "veg",
                            "image": "", "description": "Classic vanilla shake"
                        }]
                    }),
                    Some("getDashboardStats") => json!({
                        "status": "success",
                        "stats": {
                            "totalOrders": 12, "totalSales": 1840.0,
                            "todayOrders": 3, "pendingOrders": 2
                        }
                    }),
                    _ => json!({"status": "error", "error": "Unknown action"}),
                };
                Json(body)
            }
        }),
    )
}

#[tokio::test]
async fn test_typed_catalog_fetch() {
    let calls = Arc::new(AtomicUsize::new(0));
    let endpoint = spawn_service(catalog_router(calls.clone())).await;
    let client = ClientConfig::new(endpoint).build_client();

    let categories = client.get_categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Kulfi");
    assert_eq!(
        categories[0].image_url.as_deref(),
        Some("https://img.example/kulfi.jpg")
    );
    assert!(categories[1].image_url.is_none());

    let products = client.get_all_products().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].price, 50.0);

    let stats = client.get_dashboard_stats().await.unwrap();
    assert_eq!(stats.total_orders, 12);
    assert_eq!(stats.pending_orders, 2);

    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_remote_error_surfaces_message() {
    let router = Router::new().route(
        "/",
        get(|| async {
            Json(json!({
                "status": "error",
                "error": "Category is used by products. Retry with force=true to delete anyway."
            }))
        }),
    );
    let endpoint = spawn_service(router).await;
    let client = ClientConfig::new(endpoint).build_client();

    let err = client.delete_category("Kulfi", false).await.unwrap_err();
    assert!(err.is_category_conflict());
    assert!(matches!(err, ClientError::Remote(ref m) if m.contains("force=true")));
}

#[tokio::test]
async fn test_error_without_message_gets_generic_text() {
    let router = Router::new().route("/", get(|| async { Json(json!({"status": "error"})) }));
    let endpoint = spawn_service(router).await;
    let client = ClientConfig::new(endpoint).build_client();

    let err = client.get_orders().await.unwrap_err();
    assert!(matches!(err, ClientError::Remote(ref m) if m == "Unknown error occurred"));
}

#[tokio::test]
async fn test_malformed_payload_is_decode_error() {
    let router = Router::new().route(
        "/",
        get(|| async { Json(json!({"status": "success", "products": 42})) }),
    );
    let endpoint = spawn_service(router).await;
    let client = ClientConfig::new(endpoint).build_client();

    let err = client.get_all_products().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_timeout_when_service_never_responds() {
    let router = Router::new().route(
        "/",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Json(json!({"status": "success"}))
        }),
    );
    let endpoint = spawn_service(router).await;
    let client = ClientConfig::new(endpoint).with_timeout(1).build_client();

    let err = client.get_categories().await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout));
}

#[tokio::test]
async fn test_cancellation_token_aborts_call() {
    let router = Router::new().route(
        "/",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Json(json!({"status": "success"}))
        }),
    );
    let endpoint = spawn_service(router).await;

    let token = CancellationToken::new();
    let client = ClientConfig::new(endpoint)
        .with_cancellation(token.clone())
        .build_client();

    let call = tokio::spawn(async move { client.get_categories().await });
    tokio::time::sleep(Duration::from_millis(50)).await;
    token.cancel();

    let err = call.await.unwrap().unwrap_err();
    assert!(matches!(err, ClientError::Cancelled));
}

#[tokio::test]
async fn test_place_order_round_trip() {
    let received: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let seen = received.clone();
    let router = Router::new().route(
        "/",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let seen = seen.clone();
            async move {
                let draft: Value =
                    serde_json::from_str(params.get("orderData").unwrap()).unwrap();
                *seen.lock().await = Some(draft);
                Json(json!({"status": "success", "orderId": "2025-03-02T10:15:00.000Z"}))
            }
        }),
    );
    let endpoint = spawn_service(router).await;
    let client = ClientConfig::new(endpoint).build_client();

    let draft = parlour_client::OrderDraft {
        name: "Asha".to_string(),
        phone: "98765 43210".to_string(),
        email: String::new(),
        table: "4".to_string(),
        review: "less sugar".to_string(),
        cart: vec![shared::models::OrderLine {
            name: "Vanilla".to_string(),
            price: 50.0,
            quantity: 2,
        }],
        total_amount: 100.0,
    };
    let order_id = client.place_order(&draft).await.unwrap();
    assert_eq!(order_id, "2025-03-02T10:15:00.000Z");

    let sent = received.lock().await.take().unwrap();
    assert_eq!(sent["name"], "Asha");
    assert_eq!(sent["totalAmount"], 100.0);
    assert_eq!(sent["cart"][0]["quantity"], 2);
}

#[tokio::test]
async fn test_update_order_status_params() {
    let received: Arc<Mutex<Option<HashMap<String, String>>>> = Arc::new(Mutex::new(None));
    let seen = received.clone();
    let router = Router::new().route(
        "/",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let seen = seen.clone();
            async move {
                *seen.lock().await = Some(params);
                Json(json!({"status": "success"}))
            }
        }),
    );
    let endpoint = spawn_service(router).await;
    let client = ClientConfig::new(endpoint).build_client();

    client
        .update_order_status("order-1", OrderStatus::Completed)
        .await
        .unwrap();

    let params = received.lock().await.take().unwrap();
    assert_eq!(params.get("action").unwrap(), "updateOrderStatus");
    assert_eq!(params.get("orderId").unwrap(), "order-1");
    assert_eq!(params.get("status").unwrap(), "completed");
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let calls = Arc::new(AtomicUsize::new(0));
    let endpoint = spawn_service(catalog_router(calls.clone())).await;
    let client = ClientConfig::new(endpoint).build_client();

    let results = futures::future::join_all((0..4).map(|_| client.get_categories())).await;
    for result in results {
        assert_eq!(result.unwrap().len(), 2);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}
