pub mod memory;
pub mod todo;

pub use memory::MemoryTodoService;
pub use todo::{DbTodoService, TodoError, TodoService};
