//! Coupons and dispenser commissions.

use crate::resource::EntityDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const COUPONS: EntityDescriptor = EntityDescriptor {
    path: "coupons",
    singular: "coupon",
    plural: "coupons",
};

pub const COMMISSIONS: EntityDescriptor = EntityDescriptor {
    path: "commissions",
    singular: "commission",
    plural: "commissions",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountType {
    Percentage,
    Fixed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: i64,
    pub code: String,
    pub discount_type: DiscountType,
    /// Discount amount as text; the backend serializes numerics as strings.
    pub amount: String,
    /// Validity window; filtered via a `valid_from`/`valid_to` date range.
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommissionStatus {
    Pending,
    Paid,
    Void,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Commission {
    pub id: i64,
    pub dispenser_id: i64,
    pub order_id: i64,
    /// Commission amount as text; the backend serializes numerics as strings.
    pub amount: String,
    pub status: CommissionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
