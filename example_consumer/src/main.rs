//! Example consumer: a separate Rust project that uses backoffice-sdk as a dependency.
//!
//! Run from repo root: `cargo run -p example-consumer`
//! Or from this directory: `cargo run`
//!
//! Expects `BACKOFFICE_API_BASE_URL` (and a token in `BACKOFFICE_API_TOKEN`)
//! pointing at a running back-office API.

use async_trait::async_trait;
use backoffice_sdk::entities::{Coupon, Product, COUPONS, PRODUCTS};
use backoffice_sdk::store::ListState;
use backoffice_sdk::{
    Client, ListQuery, LoadingStore, SdkConfig, Session, SessionStore, SignOutHook, SortDir, Where,
};
use std::sync::Arc;

struct LogSignOut;

#[async_trait]
impl SignOutHook for LogSignOut {
    async fn signed_out(&self) {
        // A real dashboard would clear its cookie and redirect to re-auth here.
        tracing::warn!("signed out; re-authentication required");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("backoffice_sdk=info")),
        )
        .init();

    let config = SdkConfig::from_env()?;
    let session = SessionStore::new();
    session.set_hook(Arc::new(LogSignOut));
    if let Ok(token) = std::env::var("BACKOFFICE_API_TOKEN") {
        session.set_session(Session {
            access_token: token,
            expires_at: None,
        });
    }

    let loading = LoadingStore::new();
    let _overlay = loading.subscribe(|visible| {
        tracing::info!(visible, "loading overlay");
    });
    let client = Client::new(&config, session)?.with_loading(loading);

    // Independent page-load fetches run concurrently; join order is irrelevant.
    let products = client.resource::<Product>(&PRODUCTS);
    let coupons = client.resource::<Coupon>(&COUPONS);
    let product_query = ListQuery::new()
        .offset(0)
        .limit(10)
        .sort("created_at", SortDir::Desc);
    let coupon_query = ListQuery::new()
        .unpaginated()
        .filter(Where::new().eq("active", true));
    let (product_page, coupon_page) = tokio::join!(
        products.list(&product_query),
        coupons.list(&coupon_query),
    );

    let mut product_rows: ListState<Product> = ListState::new();
    match product_page.data {
        Some(page) => {
            tracing::info!(count = page.count, "products fetched");
            product_rows.replace(page);
        }
        None => tracing::error!(
            status = product_page.status_code,
            message = product_page.message.as_deref().unwrap_or("error"),
            "product list failed"
        ),
    }
    if let Some(page) = coupon_page.data {
        tracing::info!(count = page.count, "active coupons fetched");
    }

    // The deactivate row action, patched optimistically into the current page.
    if let Some(first_id) = product_rows.rows.first().map(|p| p.id) {
        let updated = products.set_active(first_id, false).await;
        if let Some(product) = updated.data {
            product_rows.patch_row(first_id, |row| row.active = product.active);
            tracing::info!(id = first_id, "product deactivated");
        }
    }

    Ok(())
}
