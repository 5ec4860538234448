//! Integration tests for the list contract: wire format of the emitted query
//! string and typed decoding of the list envelope.

mod common;

use backoffice_sdk::entities::{Product, PRODUCTS};
use backoffice_sdk::{
    Client, ListQuery, Op, SdkConfig, Session, SessionStore, SortDir, Where,
};

fn client_for(base_url: &str) -> Client {
    let session = SessionStore::new();
    session.set_session(Session {
        access_token: "test-token".into(),
        expires_at: None,
    });
    Client::new(&SdkConfig::new(base_url), session).expect("client")
}

#[tokio::test]
async fn list_decodes_rows_and_count_from_the_plural_key() {
    let (base_url, _state) = common::spawn_stub().await;
    let client = client_for(&base_url);

    let page = client
        .resource::<Product>(&PRODUCTS)
        .list(&ListQuery::new().offset(0).limit(10))
        .await;

    assert!(page.is_success());
    let data = page.data.expect("list payload");
    assert_eq!(data.count, 2);
    assert_eq!(data.items.len(), 2);
    assert_eq!(data.items[0].sku, "SKU-0001");
    assert!(data.items[0].active);
}

#[tokio::test]
async fn the_stub_receives_the_contract_parameters() {
    let (base_url, state) = common::spawn_stub().await;
    let client = client_for(&base_url);

    client
        .resource::<Product>(&PRODUCTS)
        .list(
            &ListQuery::new()
                .offset(0)
                .limit(10)
                .search("john")
                .sort("name", SortDir::Asc)
                .filter(Where::new().eq("status", "Approve")),
        )
        .await;

    let queries = state.product_queries.lock().unwrap();
    let params = queries.last().expect("one recorded query");
    assert_eq!(params.get("limit").map(String::as_str), Some("10"));
    assert_eq!(params.get("offset").map(String::as_str), Some("0"));
    assert_eq!(params.get("search").map(String::as_str), Some("john"));
    assert_eq!(
        params.get("sort").map(String::as_str),
        Some("[[\"name\",\"asc\"]]")
    );
    assert_eq!(
        params.get("where").map(String::as_str),
        Some("{\"status\":\"Approve\"}")
    );
}

#[tokio::test]
async fn unpaginated_sentinel_reaches_the_backend_verbatim() {
    let (base_url, state) = common::spawn_stub().await;
    let client = client_for(&base_url);

    client
        .resource::<Product>(&PRODUCTS)
        .list(&ListQuery::new().unpaginated())
        .await;

    let queries = state.product_queries.lock().unwrap();
    let params = queries.last().expect("one recorded query");
    assert_eq!(params.get("limit").map(String::as_str), Some("-1"));
    assert!(!params.contains_key("offset"));
}

#[tokio::test]
async fn received_where_decodes_back_to_the_original_predicate() {
    let (base_url, state) = common::spawn_stub().await;
    let client = client_for(&base_url);

    let original = Where::new()
        .op("created_at", Op::Gte, "2024-01-01T00:00:00Z")
        .op("created_at", Op::Lt, "2024-02-01T00:00:00Z")
        .op("status", Op::Not, "Reject");
    client
        .resource::<Product>(&PRODUCTS)
        .list(&ListQuery::new().limit(25).filter(original.clone()))
        .await;

    let queries = state.product_queries.lock().unwrap();
    let raw = queries
        .last()
        .and_then(|params| params.get("where"))
        .expect("where parameter");
    let decoded = Where::from_value(&serde_json::from_str(raw).expect("where is JSON"))
        .expect("where decodes");
    assert_eq!(decoded, original);
}

#[tokio::test]
async fn bearer_token_is_attached_to_every_request() {
    let (base_url, state) = common::spawn_stub().await;
    let client = client_for(&base_url);

    client
        .resource::<Product>(&PRODUCTS)
        .list(&ListQuery::new())
        .await;

    assert_eq!(
        state.last_authorization.lock().unwrap().as_deref(),
        Some("Bearer test-token")
    );
}

#[tokio::test]
async fn an_unreachable_backend_normalizes_to_a_transport_error() {
    // Grab a free port, then release it so the connection is refused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client_for(&format!("http://{}", addr));

    let page = client
        .resource::<Product>(&PRODUCTS)
        .list(&ListQuery::new())
        .await;

    assert!(page.error);
    assert_eq!(page.message.as_deref(), Some("error"));
    assert_eq!(page.status_code, 500);
}

#[tokio::test]
async fn find_decodes_the_singular_key() {
    let (base_url, _state) = common::spawn_stub().await;
    let client = client_for(&base_url);

    let found = client
        .resource::<Product>(&PRODUCTS)
        .find(Where::new().eq("sku", "SKU-0001"), &["orders"])
        .await;

    assert!(found.is_success());
    assert_eq!(found.data.expect("record").id, 1);
}
