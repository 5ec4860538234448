//! Orders.

use crate::resource::EntityDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ORDERS: EntityDescriptor = EntityDescriptor {
    path: "orders",
    singular: "order",
    plural: "orders",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub user_id: i64,
    pub status: OrderStatus,
    /// Monetary amount as text; the backend serializes numerics as strings.
    pub total: String,
    pub placed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
