//! Reusable UI components.

mod loading;
mod new_todo;
mod todo_item;

pub use loading::Loading;
pub use new_todo::NewTodo;
pub use todo_item::TodoItem;
