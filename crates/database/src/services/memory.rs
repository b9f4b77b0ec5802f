use super::todo::{TodoError, TodoService};
use async_trait::async_trait;
use models::todo_item::TodoItem;
use sea_orm::DbErr;
use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Todo storage held in process memory, ordered by id
///
/// Mirrors the table's behaviour closely enough to stand in for it in tests.
#[derive(Debug, Default)]
pub struct MemoryTodoService {
    items: Mutex<BTreeMap<i32, TodoItem>>,
}

impl MemoryTodoService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = TodoItem>) -> Self {
        Self {
            items: Mutex::new(items.into_iter().map(|item| (item.id, item)).collect()),
        }
    }

    fn items(&self) -> MutexGuard<'_, BTreeMap<i32, TodoItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TodoService for MemoryTodoService {
    async fn list(&self) -> Result<Vec<TodoItem>, TodoError> {
        Ok(self.items().values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<TodoItem, TodoError> {
        self.items()
            .get(&id)
            .cloned()
            .ok_or(TodoError::NotFound(id))
    }

    async fn add(&self, item: &TodoItem) -> Result<(), TodoError> {
        let mut items = self.items();
        if items.contains_key(&item.id) {
            return Err(DbErr::RecordNotInserted.into());
        }

        items.insert(item.id, item.clone());
        Ok(())
    }

    async fn update(&self, item: &TodoItem) -> Result<(), TodoError> {
        let mut items = self.items();
        let existing = items.get_mut(&item.id).ok_or(TodoError::NotFound(item.id))?;

        existing.title.clone_from(&item.title);
        existing.description.clone_from(&item.description);
        Ok(())
    }

    async fn remove(&self, id: i32) -> Result<(), TodoError> {
        self.items()
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoError::NotFound(id))
    }
}
