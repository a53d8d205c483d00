//! Comment handlers: add, list for a blog post, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::Table;
use crate::response::success;
use crate::service::RequestValidator;
use crate::state::AppState;
use crate::store::{Filter, Row};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde_json::Value;
use std::collections::HashMap;

pub async fn add_comment(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let fields = Table::Comments.create_fields();
    RequestValidator::require(&body.0, fields)?;
    let rows = state
        .store
        .insert(Table::Comments, body.pick(fields))
        .await
        .map_err(AppError::store("Failed to add comment"))?;
    Ok(success("Comment added successfully", rows))
}

/// `POST /api/get-comment` with `{ "blog_post_id": .. }` in the body.
pub async fn get_comments(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require(&body.0, &["blog_post_id"])?;
    comments_for_post(&state, body.field("blog_post_id")).await
}

/// `GET /api/get-comment?blog_post_id=..`, same contract as the POST form.
/// The query value is forwarded as text, like a string in the POST body.
pub async fn get_comments_by_query(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let params: Row = params
        .into_iter()
        .map(|(k, v)| (k, Value::String(v.trim().to_string())))
        .collect();
    RequestValidator::require(&params, &["blog_post_id"])?;
    let blog_post_id = params.get("blog_post_id").cloned().unwrap_or(Value::Null);
    comments_for_post(&state, blog_post_id).await
}

async fn comments_for_post(
    state: &AppState,
    blog_post_id: Value,
) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .store
        .select(Table::Comments, Some(&Filter::eq("blog_post_id", blog_post_id)))
        .await
        .map_err(AppError::store("Failed to retrieve comments"))?;
    Ok(success("Comments retrieved successfully", rows))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require(&body.0, &["id"])?;
    let rows = state
        .store
        .delete(Table::Comments, &Filter::eq("id", body.field("id")))
        .await
        .map_err(AppError::store("Failed to delete comment"))?;
    Ok(success("Comment deleted successfully", rows))
}
