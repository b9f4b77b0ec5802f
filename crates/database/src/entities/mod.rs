pub mod todo_item;

pub use todo_item::Entity as TodoItems;
