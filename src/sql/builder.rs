//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for a catalog table.

use crate::model::{Column, Table};
use crate::store::{Filter, Row};
use serde_json::Value;

/// Quote identifier for PostgreSQL (safe: only from the table catalog).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    /// Push a value and return its placeholder, cast to the column type (e.g. `$2::timestamptz`).
    fn push_param(&mut self, column: &Column, v: Value) -> String {
        self.params.push(v);
        format!("${}::{}", self.params.len(), column.pg_type)
    }

    fn push_where(&mut self, table: Table, filter: &Filter) -> String {
        match table.column(filter.column) {
            Some(c) => {
                let ph = self.push_param(c, filter.value.clone());
                format!(" WHERE {} = {}", quoted(c.name), ph)
            }
            // A filter on a column the table lacks matches nothing.
            None => " WHERE FALSE".to_string(),
        }
    }
}

/// Catalog columns present in `row`, in catalog order. Unknown keys are ignored.
fn known_columns<'r>(table: Table, row: &'r Row) -> impl Iterator<Item = (&'static Column, &'r Value)> {
    table
        .columns()
        .iter()
        .filter_map(move |c| row.get(c.name).map(|v| (c, v)))
}

/// INSERT one row. Columns the row omits fall back to their database default.
pub fn insert(table: Table, row: &Row) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (c, v) in known_columns(table, row) {
        placeholders.push(q.push_param(c, v.clone()));
        cols.push(quoted(c.name));
    }
    q.sql = if cols.is_empty() {
        format!("INSERT INTO {} DEFAULT VALUES RETURNING *", quoted(table.name()))
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            quoted(table.name()),
            cols.join(", "),
            placeholders.join(", ")
        )
    };
    q
}

/// SELECT every row, or only those matching `filter`, ordered by id.
pub fn select(table: Table, filter: Option<&Filter>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_clause = filter.map(|f| q.push_where(table, f)).unwrap_or_default();
    q.sql = format!(
        "SELECT * FROM {}{} ORDER BY {}",
        quoted(table.name()),
        where_clause,
        quoted("id")
    );
    q
}

/// UPDATE matching rows, setting only the columns present in `changes`.
/// With nothing to set this degrades to a SELECT of the matching rows.
pub fn update(table: Table, changes: &Row, filter: &Filter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (c, v) in known_columns(table, changes) {
        if c.name == "id" {
            continue;
        }
        let ph = q.push_param(c, v.clone());
        sets.push(format!("{} = {}", quoted(c.name), ph));
    }
    if sets.is_empty() {
        return select(table, Some(filter));
    }
    let where_clause = q.push_where(table, filter);
    q.sql = format!(
        "UPDATE {} SET {}{} RETURNING *",
        quoted(table.name()),
        sets.join(", "),
        where_clause
    );
    q
}

/// DELETE matching rows.
pub fn delete(table: Table, filter: &Filter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_clause = q.push_where(table, filter);
    q.sql = format!(
        "DELETE FROM {}{} RETURNING *",
        quoted(table.name()),
        where_clause
    );
    q
}
