//! HTTP wrapper: attaches the bearer token, funnels every outcome through the
//! response normalizer, and drives the sign-out side effect on 401.

use crate::config::SdkConfig;
use crate::error::SdkError;
use crate::response::{normalize, ApiResponse};
use crate::session::SessionStore;
use crate::store::LoadingStore;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    loading: Option<LoadingStore>,
}

impl Client {
    pub fn new(config: &SdkConfig, session: SessionStore) -> Result<Self, SdkError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Client {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            loading: None,
        })
    }

    /// Attach a loading store; the overlay then tracks every in-flight request.
    pub fn with_loading(mut self, loading: LoadingStore) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get(&self, path_and_query: &str) -> ApiResponse<Value> {
        let url = self.url(path_and_query);
        self.send("GET", path_and_query, self.http.get(url)).await
    }

    pub async fn post_json(&self, path: &str, body: &impl Serialize) -> ApiResponse<Value> {
        let url = self.url(path);
        self.send("POST", path, self.http.post(url).json(body)).await
    }

    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResponse<Value> {
        let url = self.url(path);
        self.send("POST", path, self.http.post(url).multipart(form))
            .await
    }

    pub async fn put_json(&self, path: &str, body: &impl Serialize) -> ApiResponse<Value> {
        let url = self.url(path);
        self.send("PUT", path, self.http.put(url).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResponse<Value> {
        let url = self.url(path);
        self.send("DELETE", path, self.http.delete(url)).await
    }

    fn url(&self, path_and_query: &str) -> String {
        format!(
            "{}/{}",
            self.base_url,
            path_and_query.trim_start_matches('/')
        )
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> ApiResponse<Value> {
        let _overlay = self.loading.as_ref().map(LoadingStore::begin);
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        tracing::debug!(method, path, "request");
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(method, path, error = %e, "request failed");
                return ApiResponse::transport_error();
            }
        };
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(method, path, error = %e, "body read failed");
                return ApiResponse::transport_error();
            }
        };
        if status == 401 {
            self.session.sign_out().await;
        }
        normalize(status, &body)
    }
}
