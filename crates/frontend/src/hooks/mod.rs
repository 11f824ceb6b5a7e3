//! Custom hooks.

mod use_todos;

pub use use_todos::{TodoSource, use_todo_actions, use_todos};
