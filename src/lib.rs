//! Backoffice SDK: typed client library for the back-office REST API.

pub mod client;
pub mod config;
pub mod entities;
pub mod error;
pub mod forms;
pub mod query;
pub mod resource;
pub mod response;
pub mod session;
pub mod store;

pub use client::Client;
pub use config::SdkConfig;
pub use error::{ConfigError, ErrorKind, SdkError, WhereError};
pub use query::{ListQuery, Op, SortDir, Where};
pub use resource::{EntityDescriptor, Resource};
pub use response::{ApiResponse, FieldError, ListData};
pub use session::{Session, SessionStore, SignOutHook};
pub use store::{DialogState, DialogStore, ListState, LoadingStore};
