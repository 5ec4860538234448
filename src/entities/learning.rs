//! E-learning content.

use crate::resource::EntityDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const COURSES: EntityDescriptor = EntityDescriptor {
    path: "courses",
    singular: "course",
    plural: "courses",
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// Rich-text HTML produced by the editor widget.
    pub body: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
