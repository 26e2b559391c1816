//! Todo handlers - CRUD operations for todo items.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::error::ApiError;
use crate::state::AppState;
use tickbox_core::TodoItem;

/// List all todos.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TodoItem>>, ApiError> {
    Ok(Json(state.todos.find_all().await?))
}

/// Get a single todo by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItem>, ApiError> {
    Ok(Json(state.todos.find_by_id(id).await?))
}

/// Create a new todo.
pub async fn create(
    State(state): State<AppState>,
    Json(item): Json<TodoItem>,
) -> Result<(StatusCode, Json<TodoItem>), ApiError> {
    let created = state.todos.create(item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace an existing todo, keyed by the id in the request body.
pub async fn update(
    State(state): State<AppState>,
    Json(item): Json<TodoItem>,
) -> Result<Json<TodoItem>, ApiError> {
    Ok(Json(state.todos.update(item).await?))
}

/// Delete a todo.
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Result<(), ApiError> {
    state.todos.delete(id).await?;
    Ok(())
}

/// Delete every todo.
pub async fn remove_all(State(state): State<AppState>) -> Result<(), ApiError> {
    state.todos.delete_all().await?;
    Ok(())
}
