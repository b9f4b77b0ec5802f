use database::services::TodoService;
use std::sync::Arc;

/// Shared handler state; holds no request data, only the storage handle
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoService>,
}

impl AppState {
    pub fn new(todos: impl TodoService + 'static) -> Self {
        Self {
            todos: Arc::new(todos),
        }
    }
}
