//! Blog post handlers: create, update, delete, list.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{Table, BLOG_UPDATE_COLUMNS, BLOG_UPDATE_FIELDS};
use crate::response::success;
use crate::service::RequestValidator;
use crate::state::AppState;
use crate::store::Filter;
use axum::{extract::State, response::IntoResponse};

pub async fn create_blog(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let fields = Table::BlogPosts.create_fields();
    RequestValidator::require(&body.0, fields)?;
    let rows = state
        .store
        .insert(Table::BlogPosts, body.pick(fields))
        .await
        .map_err(AppError::store("Failed to create blog post"))?;
    Ok(success("Blog post created successfully", rows))
}

/// Blind overwrite of title and content. An unknown id matches nothing and still succeeds.
pub async fn update_blog(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require(&body.0, BLOG_UPDATE_FIELDS)?;
    let id = body.field("id");
    let rows = state
        .store
        .update(
            Table::BlogPosts,
            body.pick(BLOG_UPDATE_COLUMNS),
            &Filter::eq("id", id.clone()),
        )
        .await
        .map_err(AppError::store("Failed to update blog post"))?;
    if rows.is_empty() {
        tracing::debug!(%id, "update-blog matched no rows");
    }
    Ok(success("Blog post updated successfully", rows))
}

pub async fn delete_blog(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require(&body.0, &["id"])?;
    let rows = state
        .store
        .delete(Table::BlogPosts, &Filter::eq("id", body.field("id")))
        .await
        .map_err(AppError::store("Failed to delete blog post"))?;
    Ok(success("Blog post deleted successfully", rows))
}

pub async fn get_blogs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .store
        .select(Table::BlogPosts, None)
        .await
        .map_err(AppError::store("Failed to retrieve blog posts"))?;
    Ok(success("Blog posts retrieved successfully", rows))
}
