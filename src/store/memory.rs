//! In-process store. Ids are assigned sequentially per table, starting at 1.
//!
//! Values are coerced to their column type the way PostgreSQL casts a text
//! parameter: `"7"` fits a `bigint` column, `"abc"` is rejected.

use super::{Filter, Row, Store};
use crate::error::StoreError;
use crate::model::{Column, Table};
use crate::service::value_eq;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct MemTable {
    next_id: i64,
    rows: Vec<Row>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<Table, MemTable>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<Table, MemTable>>, StoreError> {
        self.tables
            .read()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<Table, MemTable>>, StoreError> {
        self.tables
            .write()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }
}

fn invalid(column: &Column, raw: &str) -> StoreError {
    StoreError::Rejected {
        status: 400,
        message: format!("invalid input syntax for type {}: \"{}\"", column.pg_type, raw),
    }
}

fn coerce(column: &Column, value: Value) -> Result<Value, StoreError> {
    match (column.pg_type, value) {
        (_, Value::Null) => Ok(Value::Null),
        ("bigint", Value::Number(n)) if n.is_i64() => Ok(Value::Number(n)),
        ("bigint", Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| invalid(column, &s)),
        ("text", v @ (Value::Number(_) | Value::Bool(_))) => Ok(Value::String(v.to_string())),
        (_, Value::String(s)) => Ok(Value::String(s)),
        (_, other) => Err(invalid(column, &other.to_string())),
    }
}

/// Keep only columns the table knows and coerce each value to its column type.
fn project(table: Table, row: Row) -> Result<Row, StoreError> {
    row.into_iter()
        .filter_map(|(k, v)| table.column(&k).map(|c| (c, k, v)))
        .map(|(c, k, v)| coerce(c, v).map(|v| (k, v)))
        .collect()
}

/// Coerce the filter value. A filter on an unknown column matches nothing.
fn typed_filter(table: Table, filter: &Filter) -> Result<Option<Filter>, StoreError> {
    match table.column(filter.column) {
        Some(c) => Ok(Some(Filter {
            column: filter.column,
            value: coerce(c, filter.value.clone())?,
        })),
        None => Ok(None),
    }
}

fn matches(row: &Row, filter: &Option<Filter>) -> bool {
    filter.as_ref().is_some_and(|f| {
        row.get(f.column)
            .map(|v| value_eq(v, &f.value))
            .unwrap_or(false)
    })
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert(&self, table: Table, row: Row) -> Result<Vec<Row>, StoreError> {
        let mut row = project(table, row)?;
        let mut tables = self.write()?;
        let t = tables.entry(table).or_default();
        let id = match row.get("id").and_then(Value::as_i64) {
            Some(id) => {
                t.next_id = t.next_id.max(id);
                id
            }
            None => {
                t.next_id += 1;
                t.next_id
            }
        };
        row.insert("id".into(), id.into());
        t.rows.push(row.clone());
        Ok(vec![row])
    }

    async fn select(&self, table: Table, filter: Option<&Filter>) -> Result<Vec<Row>, StoreError> {
        let filter = filter.map(|f| typed_filter(table, f)).transpose()?;
        let tables = self.read()?;
        let Some(t) = tables.get(&table) else {
            return Ok(Vec::new());
        };
        Ok(t.rows
            .iter()
            .filter(|r| filter.as_ref().map_or(true, |f| matches(r, f)))
            .cloned()
            .collect())
    }

    async fn update(&self, table: Table, changes: Row, filter: &Filter) -> Result<Vec<Row>, StoreError> {
        let changes = project(table, changes)?;
        let filter = typed_filter(table, filter)?;
        let mut tables = self.write()?;
        let Some(t) = tables.get_mut(&table) else {
            return Ok(Vec::new());
        };
        let mut out = Vec::new();
        for row in t.rows.iter_mut().filter(|r| matches(r, &filter)) {
            for (k, v) in &changes {
                row.insert(k.clone(), v.clone());
            }
            out.push(row.clone());
        }
        Ok(out)
    }

    async fn delete(&self, table: Table, filter: &Filter) -> Result<Vec<Row>, StoreError> {
        let filter = typed_filter(table, filter)?;
        let mut tables = self.write()?;
        let Some(t) = tables.get_mut(&table) else {
            return Ok(Vec::new());
        };
        let (removed, kept): (Vec<Row>, Vec<Row>) = std::mem::take(&mut t.rows)
            .into_iter()
            .partition(|r| matches(r, &filter));
        t.rows = kept;
        Ok(removed)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }
}
