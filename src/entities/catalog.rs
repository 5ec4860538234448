//! Product catalog.

use crate::resource::EntityDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PRODUCTS: EntityDescriptor = EntityDescriptor {
    path: "products",
    singular: "product",
    plural: "products",
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    /// Monetary amount as text; the backend serializes numerics as strings.
    pub price: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
