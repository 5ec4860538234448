//! In-process stub of the back-office REST API: just enough surface to
//! exercise the client contract end to end.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// What the stub observed, for assertions against the wire format.
#[derive(Clone, Default)]
pub struct StubState {
    pub product_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    pub last_authorization: Arc<Mutex<Option<String>>>,
}

/// Bind the stub on an ephemeral port and serve it in the background.
/// Returns the base URL and the observation handle.
pub async fn spawn_stub() -> (String, StubState) {
    let state = StubState::default();
    let app = Router::new()
        .route("/products", get(list_products))
        .route("/products/find", get(find_product))
        .route(
            "/products/:id",
            axum::routing::put(update_product).delete(delete_product),
        )
        .route("/coupons", axum::routing::post(create_coupon))
        .route("/orders", get(unauthorized))
        .with_state(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });
    (format!("http://{}", addr), state)
}

pub fn product_json(id: i64, active: bool) -> Value {
    json!({
        "id": id,
        "name": format!("Product {}", id),
        "sku": format!("SKU-{:04}", id),
        "price": "19.90",
        "description": null,
        "image_url": null,
        "active": active,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    })
}

async fn list_products(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    *state.last_authorization.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.product_queries.lock().unwrap().push(params);
    Json(json!({
        "data": {
            "products": [product_json(1, true), product_json(2, true)],
            "count": 2
        }
    }))
}

async fn find_product(Query(_params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({"data": {"product": product_json(1, true)}}))
}

async fn update_product(Path(id): Path<i64>, Json(body): Json<Value>) -> Json<Value> {
    let active = body
        .get("active")
        .and_then(Value::as_bool)
        .unwrap_or(true);
    Json(json!({"data": {"product": product_json(id, active)}}))
}

async fn delete_product(Path(_id): Path<i64>) -> Json<Value> {
    Json(json!({"message": "product deleted"}))
}

async fn create_coupon(Json(_body): Json<Value>) -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "message": [
                {"property": "code", "constraints": {"isNotEmpty": "code should not be empty"}},
                {"property": "valid_to", "constraints": {"isDate": "valid_to must be a date"}}
            ]
        })),
    )
}

async fn unauthorized() -> impl IntoResponse {
    (StatusCode::UNAUTHORIZED, Json(json!({"message": "Unauthorized"})))
}
