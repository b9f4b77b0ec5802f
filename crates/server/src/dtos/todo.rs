use models::{todo_item::TodoItem, validation::FieldErrors};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body accepted by create and update. Every field is optional here so that a missing
/// field surfaces as a validation message rather than a deserialization failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TodoItemRequest {
    pub id: Option<i32>,
    #[schema(max_length = 255)]
    pub title: Option<String>,
    #[schema(max_length = 1000)]
    pub description: Option<String>,
}

impl TodoItemRequest {
    pub fn validate(self) -> Result<TodoItem, FieldErrors> {
        TodoItem::validated(self.id, self.title, self.description)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TodoItemResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
}

impl From<TodoItem> for TodoItemResponse {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
        }
    }
}
