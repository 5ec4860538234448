//! Users and dispensers. Applicants are dispensers still in `Pending`.

use crate::resource::EntityDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const USERS: EntityDescriptor = EntityDescriptor {
    path: "users",
    singular: "user",
    plural: "users",
};

pub const DISPENSERS: EntityDescriptor = EntityDescriptor {
    path: "dispensers",
    singular: "dispenser",
    plural: "dispensers",
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review state of a dispenser application. Variant spelling matches the wire
/// values the backend stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicantStatus {
    Pending,
    Approve,
    Reject,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dispenser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: ApplicantStatus,
    /// Percentage as text; the backend serializes numerics as strings.
    #[serde(default)]
    pub commission_rate: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
