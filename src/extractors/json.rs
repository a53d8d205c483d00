//! Lenient JSON body extractor that answers in the API's error envelope.

use crate::error::AppError;
use crate::store::Row;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

/// Request body as a JSON object. An empty body or a non-object value yields an empty
/// object, so required-field checks report the fields as missing.
#[derive(Clone, Debug)]
pub struct JsonBody(pub Row);

impl JsonBody {
    /// Copy out the named fields as a store row, skipping any the body lacks.
    /// Values pass through as sent; the store coerces or rejects them.
    pub fn pick(&self, fields: &[&str]) -> Row {
        fields
            .iter()
            .filter_map(|f| self.0.get(*f).map(|v| (f.to_string(), v.clone())))
            .collect()
    }

    /// The raw value of one field, `null` when absent.
    pub fn field(&self, name: &str) -> Value {
        self.0.get(name).cloned().unwrap_or(Value::Null)
    }
}

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BodyRejected {
                status: e.status(),
                detail: e.body_text(),
            })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Row::new()));
        }
        let value: Value = serde_json::from_slice(&bytes).map_err(|e| AppError::BadRequest {
            message: "Invalid JSON body".into(),
            detail: Some(e.to_string()),
        })?;
        Ok(JsonBody(match value {
            Value::Object(map) => map,
            _ => Row::new(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: Value) -> JsonBody {
        JsonBody(v.as_object().cloned().unwrap())
    }

    #[test]
    fn pick_keeps_listed_fields_as_sent() {
        let b = body(json!({"user_id": "1", "title": "t", "extra": true}));
        let row = b.pick(&["user_id", "title", "content"]);
        assert_eq!(row.len(), 2);
        assert_eq!(row["user_id"], "1");
        assert!(row.get("extra").is_none());
    }

    #[test]
    fn field_defaults_to_null() {
        let b = body(json!({"id": 7}));
        assert_eq!(b.field("id"), 7);
        assert!(b.field("blog_post_id").is_null());
    }
}
