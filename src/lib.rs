//! Blog API: JSON CRUD endpoints for users, blog posts and comments over a relational store.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod password;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, StoreConfig, StoreKind};
pub use error::{AppError, ConfigError, StoreError};
pub use response::{success, Envelope};
pub use routes::{api_routes, app, common_routes};
pub use state::AppState;
pub use store::{MemoryStore, PgStore, RestStore, Store};
