//! `/api/*` routes. Paths and methods are fixed by the public contract, including the
//! body-carrying `POST /api/get-comment` read.

use crate::handlers::{
    add_comment, create_blog, create_user, delete_blog, delete_comment, delete_user, get_blogs,
    get_comments, get_comments_by_query, get_users, update_blog,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/create-user", post(create_user))
        .route("/delete-user", delete(delete_user))
        .route("/get-users", get(get_users))
        .route("/create-blog", post(create_blog))
        .route("/update-blog", patch(update_blog))
        .route("/delete-blog", delete(delete_blog))
        .route("/get-blogs", get(get_blogs))
        .route("/add-comment", post(add_comment))
        .route("/get-comment", post(get_comments).get(get_comments_by_query))
        .route("/delete-comment", delete(delete_comment))
        .with_state(state)
}
