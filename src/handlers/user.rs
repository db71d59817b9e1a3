use axum::{
    extract::{Extension, Path},
    Json,
};
use std::sync::Arc;

use crate::constants::{USER_DELETED, USER_NOT_FOUND};
use crate::error::ServerError;
use crate::handlers::JsonInput;
use crate::models::{NewUserInput, UserResponse};
use crate::server::State;

/// Handler for `POST /user`
pub(crate) async fn create_user(
    state: Extension<Arc<State>>,
    JsonInput(input): JsonInput<NewUserInput>,
) -> Result<Json<UserResponse>, ServerError> {
    let user = state.store.create_user(input.name, input.email).await?;
    Ok(Json(user.into()))
}

/// Handler for `GET /user/:email`
///
/// Emails are not unique, so every match is returned.
pub(crate) async fn get_user(
    Path(email): Path<String>,
    state: Extension<Arc<State>>,
) -> Result<Json<Vec<UserResponse>>, ServerError> {
    let users = state.store.find_users_by_email(&email).await?;
    if users.is_empty() {
        return Err(ServerError::NotFound(USER_NOT_FOUND));
    }
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Handler for `GET /users`
pub(crate) async fn get_users(
    state: Extension<Arc<State>>,
) -> Result<Json<Vec<UserResponse>>, ServerError> {
    let users = state.store.all_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Handler for `DELETE /user/:id`
pub(crate) async fn delete_user(
    Path(id): Path<i32>,
    state: Extension<Arc<State>>,
) -> Result<Json<&'static str>, ServerError> {
    if !state.store.delete_user(id).await? {
        return Err(ServerError::NotFound(USER_NOT_FOUND));
    }
    Ok(Json(USER_DELETED))
}
