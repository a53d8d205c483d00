//! PostgREST-compatible HTTP backend (the REST surface of managed Postgres services).
//!
//! Tables live under `{url}/rest/v1/{table}`. Filters are sent as `column=eq.value` query
//! parameters and every mutating call asks for the affected rows back with
//! `Prefer: return=representation`.

use super::{Filter, Row, Store};
use crate::error::StoreError;
use crate::model::Table;
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::Value;

const REST_PREFIX: &str = "/rest/v1";

pub struct RestStore {
    client: reqwest::Client,
    base: String,
    api_key: Option<String>,
}

impl RestStore {
    pub fn new(url: &str, api_key: Option<&str>) -> Self {
        RestStore {
            client: reqwest::Client::new(),
            base: rest_base(url),
            api_key: api_key.map(str::to_string),
        }
    }

    fn request(&self, method: Method, table: Table) -> RequestBuilder {
        let url = format!("{}/{}", self.base, table.name());
        let mut rb = self
            .client
            .request(method, url)
            .header("Prefer", "return=representation");
        if let Some(key) = &self.api_key {
            rb = rb.header("apikey", key).bearer_auth(key);
        }
        rb
    }

    async fn send(&self, rb: RequestBuilder) -> Result<Vec<Row>, StoreError> {
        let resp = rb.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: rejection_message(status, &text),
            });
        }
        let bytes = resp.bytes().await?;
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// `https://x.example.co` and `https://x.example.co/rest/v1/` both become `https://x.example.co/rest/v1`.
fn rest_base(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    if trimmed.ends_with(REST_PREFIX) {
        trimmed.to_string()
    } else {
        format!("{}{}", trimmed, REST_PREFIX)
    }
}

fn filter_param(filter: &Filter) -> (String, String) {
    let value = match &filter.value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    (filter.column.to_string(), format!("eq.{}", value))
}

/// PostgREST errors are `{"code", "message", "details", "hint"}`; fall back to the raw body.
fn rejection_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(err)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(m)) = err.get("message") {
            return m.clone();
        }
    }
    if !body.trim().is_empty() {
        return body.trim().to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("store returned HTTP {}", status.as_u16()))
}

#[async_trait]
impl Store for RestStore {
    async fn insert(&self, table: Table, row: Row) -> Result<Vec<Row>, StoreError> {
        let rb = self.request(Method::POST, table).json(&[row]);
        self.send(rb).await
    }

    async fn select(&self, table: Table, filter: Option<&Filter>) -> Result<Vec<Row>, StoreError> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(filter.map(filter_param));
        let rb = self.request(Method::GET, table).query(&params);
        self.send(rb).await
    }

    async fn update(&self, table: Table, changes: Row, filter: &Filter) -> Result<Vec<Row>, StoreError> {
        let rb = self
            .request(Method::PATCH, table)
            .query(&[filter_param(filter)])
            .json(&changes);
        self.send(rb).await
    }

    async fn delete(&self, table: Table, filter: &Filter) -> Result<Vec<Row>, StoreError> {
        let rb = self.request(Method::DELETE, table).query(&[filter_param(filter)]);
        self.send(rb).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let rb = self
            .request(Method::GET, Table::Users)
            .query(&[("select", "id"), ("limit", "1")]);
        self.send(rb).await.map(|_| ())
    }
}
