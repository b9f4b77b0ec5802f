use crate::{
    dtos::todo::{TodoItemRequest, TodoItemResponse},
    error::ApiError,
    state::AppState,
};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use log::warn;
use models::todo_item::TodoItem;

/// Path every todo route is mounted under
pub const TODO_ROOT: &str = "/todo";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_todos).post(create_todo).put(update_todo))
        .route("/{id}", get(get_todo_by_id).delete(delete_todo))
}

/// Deserializes and validates a body before anything touches storage
fn validated(payload: Result<Json<TodoItemRequest>, JsonRejection>) -> Result<TodoItem, ApiError> {
    let Json(request) = payload?;

    request.validate().map_err(|errors| {
        let fields: Vec<&str> = errors.fields().collect();
        warn!("Rejected todo item with invalid fields: {}", fields.join(", "));
        ApiError::Validation(errors)
    })
}

/// Get every todo item
#[utoipa::path(
    get,
    path = "/todo",
    responses(
        (status = 200, description = "All stored todo items", body = Vec<TodoItemResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Todo"
)]
pub async fn get_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoItemResponse>>, ApiError> {
    let items = state.todos.list().await?;

    Ok(Json(items.into_iter().map(TodoItemResponse::from).collect()))
}

/// Get a todo item by ID
#[utoipa::path(
    get,
    path = "/todo/{id}",
    params(
        ("id" = i32, Path, description = "Todo item ID")
    ),
    responses(
        (status = 200, description = "Todo item found", body = TodoItemResponse),
        (status = 404, description = "Todo item not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Todo"
)]
pub async fn get_todo_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TodoItemResponse>, ApiError> {
    let item = state.todos.get_by_id(id).await?;

    Ok(Json(item.into()))
}

/// Create a todo item with a caller-chosen ID
#[utoipa::path(
    post,
    path = "/todo",
    request_body = TodoItemRequest,
    responses(
        (status = 201, description = "Todo item created", body = TodoItemResponse,
            headers(("Location" = String, description = "Path of the created item"))),
        (status = 400, description = "Invalid todo item, with messages keyed by field"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Todo"
)]
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let item = validated(payload)?;

    state.todos.add(&item).await?;

    let location = format!("{TODO_ROOT}/{}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoItemResponse::from(item)),
    ))
}

/// Replace the title and description of an existing todo item
#[utoipa::path(
    put,
    path = "/todo",
    request_body = TodoItemRequest,
    responses(
        (status = 204, description = "Todo item updated"),
        (status = 400, description = "Invalid todo item, with messages keyed by field"),
        (status = 404, description = "Todo item not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Todo"
)]
pub async fn update_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoItemRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let item = validated(payload)?;

    state.todos.update(&item).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a todo item by ID
#[utoipa::path(
    delete,
    path = "/todo/{id}",
    params(
        ("id" = i32, Path, description = "Todo item ID")
    ),
    responses(
        (status = 204, description = "Todo item deleted"),
        (status = 404, description = "Todo item not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Todo"
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.todos.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
