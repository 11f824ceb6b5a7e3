//! API route handlers.

mod todos;

pub use todos::*;
