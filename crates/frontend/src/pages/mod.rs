//! Page components.

mod drag_drop;
mod todo_app;
mod todo_app_two;
mod trash;

pub use drag_drop::DragDropPage;
pub use todo_app::TodoAppPage;
pub use todo_app_two::TodoAppTwoPage;
pub use trash::TrashPage;
