use crate::{
    dtos::todo::{TodoItemRequest, TodoItemResponse},
    routes::todo,
};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        todo::get_todos,
        todo::get_todo_by_id,
        todo::create_todo,
        todo::update_todo,
        todo::delete_todo
    ),
    components(schemas(TodoItemRequest, TodoItemResponse)),
    tags(
        (name = "Todo", description = "Todo item endpoints"),
    ),
    info(
        title = "Todo API",
        version = "1.0.0",
        description = "Create, read, update and delete todo items",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
