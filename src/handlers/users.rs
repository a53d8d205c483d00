//! User handlers: create, delete, list.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::Table;
use crate::password::hash_password;
use crate::response::success;
use crate::service::RequestValidator;
use crate::state::AppState;
use crate::store::Filter;
use axum::{extract::State, response::IntoResponse};
use serde_json::Value;

pub async fn create_user(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let fields = Table::Users.create_fields();
    RequestValidator::require(&body.0, fields)?;
    let mut row = body.pick(fields);
    // Non-string passwords are hashed as their JSON text.
    let plain = match body.field("password") {
        Value::String(s) => s,
        other => other.to_string(),
    };
    let hashed = hash_password(&plain)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))?;
    row.insert("password".into(), hashed.into());
    let rows = state
        .store
        .insert(Table::Users, row)
        .await
        .map_err(AppError::store("Failed to create user"))?;
    tracing::info!(username = %body.field("username"), "user created");
    Ok(success("User created successfully", Table::Users.redact(rows)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require(&body.0, &["id"])?;
    let rows = state
        .store
        .delete(Table::Users, &Filter::eq("id", body.field("id")))
        .await
        .map_err(AppError::store("Failed to delete user"))?;
    Ok(success("User deleted successfully", Table::Users.redact(rows)))
}

pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .store
        .select(Table::Users, None)
        .await
        .map_err(AppError::store("Failed to retrieve users"))?;
    Ok(success("Users retrieved successfully", Table::Users.redact(rows)))
}
