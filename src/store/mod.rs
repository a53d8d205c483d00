//! Table-scoped store client: insert, select, update and delete with equality filters.
//!
//! One handle is built at startup from [`StoreConfig`] and shared by every handler.
//! The backend follows the scheme of the store url.

mod memory;
mod postgres;
mod rest;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use rest::RestStore;

use crate::config::{StoreConfig, StoreKind};
use crate::error::StoreError;
use crate::model::Table;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// One record as exchanged with the store.
pub type Row = serde_json::Map<String, Value>;

/// `column = value` match applied by select, update and delete.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub column: &'static str,
    pub value: Value,
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Into<Value>) -> Self {
        Filter {
            column,
            value: value.into(),
        }
    }
}

/// Every operation returns the affected rows. Zero matched rows is not an error.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert(&self, table: Table, row: Row) -> Result<Vec<Row>, StoreError>;

    async fn select(&self, table: Table, filter: Option<&Filter>) -> Result<Vec<Row>, StoreError>;

    async fn update(&self, table: Table, changes: Row, filter: &Filter) -> Result<Vec<Row>, StoreError>;

    async fn delete(&self, table: Table, filter: &Filter) -> Result<Vec<Row>, StoreError>;

    /// Cheap round-trip used by `/ready`.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Build the store handle for `config`. Postgres pools connect lazily, so an unreachable
/// database shows up as a failed request rather than a failed start.
pub fn connect(config: &StoreConfig) -> Result<Arc<dyn Store>, StoreError> {
    let store: Arc<dyn Store> = match config.kind {
        StoreKind::Postgres => Arc::new(PgStore::connect_lazy(&config.url, config.max_connections)?),
        StoreKind::Rest => Arc::new(RestStore::new(&config.url, config.api_key.as_deref())),
        StoreKind::Memory => Arc::new(MemoryStore::new()),
    };
    tracing::info!(backend = ?config.kind, "store client ready");
    Ok(store)
}

