//! CMS pages, email templates, testimonials.

use crate::resource::EntityDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PAGES: EntityDescriptor = EntityDescriptor {
    path: "pages",
    singular: "page",
    plural: "pages",
};

pub const TEMPLATES: EntityDescriptor = EntityDescriptor {
    path: "templates",
    singular: "template",
    plural: "templates",
};

pub const TESTIMONIALS: EntityDescriptor = EntityDescriptor {
    path: "testimonials",
    singular: "testimonial",
    plural: "testimonials",
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// Rich-text HTML produced by the editor widget.
    pub body: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub body: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub author: String,
    pub quote: String,
    #[serde(default)]
    pub rating: Option<u8>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
