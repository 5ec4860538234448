//! Generic typed resource over an entity descriptor.
//!
//! Every management screen speaks the same REST shape; the descriptor supplies
//! the pluralized path and the singular/plural payload keys, the type
//! parameter supplies the DTO.

use crate::client::Client;
use crate::query::{ListQuery, Where};
use crate::response::{ApiResponse, ListData};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::marker::PhantomData;

/// Backend-owned resource type addressed by a pluralized REST path.
#[derive(Clone, Copy, Debug)]
pub struct EntityDescriptor {
    pub path: &'static str,
    /// Payload key of single-record responses, e.g. `{"data": {"product": ...}}`.
    pub singular: &'static str,
    /// Payload key of list responses, e.g. `{"data": {"products": [...], "count": n}}`.
    pub plural: &'static str,
}

pub struct Resource<'a, T> {
    client: &'a Client,
    descriptor: &'static EntityDescriptor,
    _marker: PhantomData<fn() -> T>,
}

impl Client {
    pub fn resource<T: DeserializeOwned>(
        &self,
        descriptor: &'static EntityDescriptor,
    ) -> Resource<'_, T> {
        Resource {
            client: self,
            descriptor,
            _marker: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> Resource<'_, T> {
    /// `GET <path>?<query>` -> one page of rows plus the total count.
    pub async fn list(&self, query: &ListQuery) -> ApiResponse<ListData<T>> {
        let path = join(self.descriptor.path, &query.to_query_string());
        self.client.get(&path).await.decode_list(self.descriptor.plural)
    }

    /// `GET <path>/find?where=...&populate=...` -> first matching record.
    pub async fn find(&self, filter: Where, populate: &[&str]) -> ApiResponse<T> {
        let query = ListQuery::new()
            .filter(filter)
            .populate(populate.iter().copied())
            .to_query_string();
        let path = join(&format!("{}/find", self.descriptor.path), &query);
        self.client.get(&path).await.decode_one(self.descriptor.singular)
    }

    /// `POST <path>` with a JSON body.
    pub async fn create(&self, body: &impl Serialize) -> ApiResponse<T> {
        self.client
            .post_json(self.descriptor.path, body)
            .await
            .decode_one(self.descriptor.singular)
    }

    /// `POST <path>` with a multipart body (file uploads).
    pub async fn create_multipart(&self, form: reqwest::multipart::Form) -> ApiResponse<T> {
        self.client
            .post_multipart(self.descriptor.path, form)
            .await
            .decode_one(self.descriptor.singular)
    }

    /// `PUT <path>/<id>` with a partial JSON body.
    pub async fn update(&self, id: i64, body: &impl Serialize) -> ApiResponse<T> {
        self.client
            .put_json(&format!("{}/{}", self.descriptor.path, id), body)
            .await
            .decode_one(self.descriptor.singular)
    }

    /// The activate/deactivate row action: a partial update of `active`.
    pub async fn set_active(&self, id: i64, active: bool) -> ApiResponse<T> {
        self.update(id, &json!({ "active": active })).await
    }

    /// `DELETE <path>/<id>` -> `{message}` only.
    pub async fn delete(&self, id: i64) -> ApiResponse<()> {
        self.client
            .delete(&format!("{}/{}", self.descriptor.path, id))
            .await
            .into_unit()
    }
}

fn join(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}
