//! Required-field checks on request bodies.

use crate::error::AppError;
use serde_json::Value;

use crate::store::Row;

pub struct RequestValidator;

impl RequestValidator {
    /// Fail unless every field in `required` is present and truthy.
    ///
    /// Absent, `null`, `false`, `0` and `""` all count as missing. The message names the
    /// field only when a single one is required.
    pub fn require(body: &Row, required: &[&str]) -> Result<(), AppError> {
        let missing = required.iter().any(|field| !body.get(*field).is_some_and(is_truthy));
        if !missing {
            return Ok(());
        }
        Err(AppError::MissingFields(match required {
            [field] => format!("Missing required field: {}", field),
            _ => "Missing required fields".to_string(),
        }))
    }
}

pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Loose equality used for filters: numbers compare by value regardless of representation.
pub fn value_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::String(s), Value::String(t)) => s == t,
        (Value::Number(n), Value::Number(m)) => n.as_f64() == m.as_f64(),
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: Value) -> Row {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn all_present_passes() {
        let b = body(json!({"username": "a", "email": "a@x.com", "password": "p", "created_at": "2024-01-01"}));
        assert!(RequestValidator::require(&b, &["username", "email", "password", "created_at"]).is_ok());
    }

    #[test]
    fn any_missing_field_fails_with_fixed_message() {
        let fields = ["username", "email", "password", "created_at"];
        for skip in fields {
            let mut b = body(json!({"username": "a", "email": "a@x.com", "password": "p", "created_at": "2024-01-01"}));
            b.remove(skip);
            match RequestValidator::require(&b, &fields) {
                Err(AppError::MissingFields(m)) => assert_eq!(m, "Missing required fields"),
                other => panic!("expected missing fields for {skip}, got {other:?}"),
            }
        }
    }

    #[test]
    fn single_field_message_names_field() {
        let b = body(json!({}));
        match RequestValidator::require(&b, &["id"]) {
            Err(AppError::MissingFields(m)) => assert_eq!(m, "Missing required field: id"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for v in [json!(null), json!(false), json!(0), json!(""), json!(0.0)] {
            let b = body(json!({ "id": v.clone() }));
            assert!(RequestValidator::require(&b, &["id"]).is_err(), "{v} should be missing");
        }
        for v in [json!(1), json!("x"), json!(true), json!([]), json!({})] {
            let b = body(json!({ "id": v.clone() }));
            assert!(RequestValidator::require(&b, &["id"]).is_ok(), "{v} should be present");
        }
    }

    #[test]
    fn numbers_compare_by_value() {
        assert!(value_eq(&json!(3), &json!(3.0)));
        assert!(!value_eq(&json!(3), &json!("3")));
    }
}
