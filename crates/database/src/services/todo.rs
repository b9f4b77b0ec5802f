use crate::entities::{TodoItems, todo_item};
use async_trait::async_trait;
use log::debug;
use models::todo_item::TodoItem;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};
use thiserror::Error;

/// Failure of a todo storage operation
#[derive(Debug, Error)]
pub enum TodoError {
    /// No row exists for the requested id
    #[error("todo item {0} not found")]
    NotFound(i32),

    /// Anything the storage layer reports that is not a missing row
    #[error(transparent)]
    Database(#[from] DbErr),
}

/// Storage operations over todo items
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Returns every stored item in storage order
    async fn list(&self) -> Result<Vec<TodoItem>, TodoError>;

    async fn get_by_id(&self, id: i32) -> Result<TodoItem, TodoError>;

    /// Stores a new item. An id that is already taken fails as a storage error.
    async fn add(&self, item: &TodoItem) -> Result<(), TodoError>;

    /// Overwrites the title and description of the item with `item.id`
    async fn update(&self, item: &TodoItem) -> Result<(), TodoError>;

    async fn remove(&self, id: i32) -> Result<(), TodoError>;
}

/// Todo storage backed by the `todo_items` table
#[derive(Debug, Clone)]
pub struct DbTodoService {
    db: DatabaseConnection,
}

impl DbTodoService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find(&self, id: i32) -> Result<todo_item::Model, TodoError> {
        TodoItems::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(TodoError::NotFound(id))
    }
}

#[async_trait]
impl TodoService for DbTodoService {
    async fn list(&self) -> Result<Vec<TodoItem>, TodoError> {
        let items = TodoItems::find().all(&self.db).await?;
        debug!("Listed {} todo items", items.len());

        Ok(items.into_iter().map(TodoItem::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<TodoItem, TodoError> {
        debug!("Fetching todo item {id}");
        self.find(id).await.map(TodoItem::from)
    }

    async fn add(&self, item: &TodoItem) -> Result<(), TodoError> {
        debug!("Inserting todo item {}", item.id);

        let model = todo_item::ActiveModel {
            id: Set(item.id),
            title: Set(item.title.clone()),
            description: Set(item.description.clone()),
        };
        TodoItems::insert(model)
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }

    // The lookup and the write run as separate statements. A concurrent delete landing
    // between them makes the write fail with a storage error instead of NotFound.
    async fn update(&self, item: &TodoItem) -> Result<(), TodoError> {
        debug!("Updating todo item {}", item.id);

        let mut model: todo_item::ActiveModel = self.find(item.id).await?.into();
        model.title = Set(item.title.clone());
        model.description = Set(item.description.clone());
        model.update(&self.db).await?;

        Ok(())
    }

    // Same lookup-then-write race as `update`; a concurrent delete makes this a no-op delete.
    async fn remove(&self, id: i32) -> Result<(), TodoError> {
        debug!("Removing todo item {id}");

        let existing = self.find(id).await?;
        TodoItems::delete_by_id(existing.id).exec(&self.db).await?;

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db::create_connection;
    use sea_orm::{ConnectionTrait, Schema};

    pub(crate) fn item(id: i32, title: &str, description: &str) -> TodoItem {
        TodoItem {
            id,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// Behaviour every `TodoService` implementation has to share
    pub(crate) async fn check_contract(service: &dyn TodoService) {
        assert!(service.list().await.unwrap().is_empty());
        assert!(matches!(
            service.get_by_id(99).await,
            Err(TodoError::NotFound(99))
        ));

        service.add(&item(1, "Buy milk", "2%")).await.unwrap();
        service.add(&item(2, "Walk dog", "Twice")).await.unwrap();

        assert_eq!(
            service.get_by_id(1).await.unwrap(),
            item(1, "Buy milk", "2%")
        );

        service
            .update(&item(1, "Buy milk", "whole"))
            .await
            .unwrap();
        assert_eq!(
            service.get_by_id(1).await.unwrap(),
            item(1, "Buy milk", "whole")
        );

        assert!(matches!(
            service.update(&item(7, "Missing", "Row")).await,
            Err(TodoError::NotFound(7))
        ));
        assert!(matches!(
            service.get_by_id(7).await,
            Err(TodoError::NotFound(7))
        ));

        let mut listed = service.list().await.unwrap();
        listed.sort_by_key(|todo| todo.id);
        assert_eq!(
            listed,
            vec![item(1, "Buy milk", "whole"), item(2, "Walk dog", "Twice")]
        );

        service.remove(1).await.unwrap();
        assert!(matches!(
            service.get_by_id(1).await,
            Err(TodoError::NotFound(1))
        ));
        assert!(matches!(
            service.remove(1).await,
            Err(TodoError::NotFound(1))
        ));
        assert_eq!(service.list().await.unwrap(), vec![item(2, "Walk dog", "Twice")]);

        assert!(matches!(
            service.add(&item(2, "Duplicate", "Id")).await,
            Err(TodoError::Database(_))
        ));
        assert_eq!(
            service.get_by_id(2).await.unwrap(),
            item(2, "Walk dog", "Twice")
        );
    }

    async fn sqlite_service() -> DbTodoService {
        let db = create_connection("sqlite::memory:", 1)
            .await
            .expect("Failed to open in-memory sqlite");

        let backend = db.get_database_backend();
        let schema = Schema::new(backend);
        db.execute(backend.build(&schema.create_table_from_entity(TodoItems)))
            .await
            .expect("Failed to create todo_items table");

        DbTodoService::new(db)
    }

    #[tokio::test]
    async fn test_db_service_contract() {
        let service = sqlite_service().await;
        check_contract(&service).await;
    }

    #[tokio::test]
    async fn test_db_update_keeps_id() {
        let service = sqlite_service().await;
        service.add(&item(5, "Old", "Text")).await.unwrap();

        service.update(&item(5, "New", "Words")).await.unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all, vec![item(5, "New", "Words")]);
    }
}
