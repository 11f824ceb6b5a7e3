//! Core types for the to-do list application.
//!
//! This crate defines the domain model shared by the store, the
//! HTTP server and the WASM front end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Schema version for database migrations.
pub const SCHEMA_VERSION: u32 = 1;

/// A single to-do item.
///
/// An item with `deleted_at` set lives in the trash; it keeps its
/// display order so a restore puts it back where it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Row identifier
    pub id: i64,
    /// Item text
    pub title: String,
    /// Whether the item is done
    pub completed: bool,
    /// Position in the list (ascending)
    pub display_order: i64,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
    /// Time the item was moved to the trash
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Whether the item is in the trash.
    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Visibility filter for a to-do list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    /// Every filter, in display order.
    pub const ALL: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Active, TodoFilter::Completed];

    /// Whether `todo` is visible under this filter.
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !todo.completed,
            TodoFilter::Completed => todo.completed,
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Active => "Active",
            TodoFilter::Completed => "Completed",
        }
    }
}

/// Direction of a display-order move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Unchanged,
    /// Towards a smaller display order.
    Up,
    /// Towards a larger display order.
    Down,
}

impl Move {
    /// Classify a move from `old` to `new`.
    pub fn between(old: i64, new: i64) -> Self {
        match old.cmp(&new) {
            std::cmp::Ordering::Equal => Move::Unchanged,
            std::cmp::Ordering::Greater => Move::Up,
            std::cmp::Ordering::Less => Move::Down,
        }
    }
}

/// Display order a bystander item takes when another item moves from
/// `old` to `new`.
///
/// Moving up pushes `[new, old)` down by one; moving down pulls
/// `(old, new]` up by one. Everything else keeps its order.
pub fn shifted_order(order: i64, old: i64, new: i64) -> i64 {
    match Move::between(old, new) {
        Move::Up if order >= new && order < old => order + 1,
        Move::Down if order > old && order <= new => order - 1,
        _ => order,
    }
}

/// Move item `item_id` from display order `old` to `new`, shifting the
/// others, and re-sort `todos` by display order.
///
/// Returns `false` (leaving `todos` untouched) when the move is a no-op
/// or the item is not present.
pub fn apply_move(todos: &mut Vec<Todo>, item_id: i64, old: i64, new: i64) -> bool {
    if Move::between(old, new) == Move::Unchanged || !todos.iter().any(|t| t.id == item_id) {
        return false;
    }

    for todo in todos.iter_mut() {
        todo.display_order = if todo.id == item_id {
            new
        } else {
            shifted_order(todo.display_order, old, new)
        };
    }
    todos.sort_by_key(|t| t.display_order);
    true
}

/// Number of items not yet completed.
pub fn remaining(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.completed).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, order: i64) -> Todo {
        let now = Utc::now();
        Todo {
            id,
            title: format!("item {id}"),
            completed: false,
            display_order: order,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    fn orders(todos: &[Todo]) -> Vec<(i64, i64)> {
        todos.iter().map(|t| (t.id, t.display_order)).collect()
    }

    #[test]
    fn test_move_between() {
        assert_eq!(Move::between(3, 3), Move::Unchanged);
        assert_eq!(Move::between(5, 2), Move::Up);
        assert_eq!(Move::between(2, 5), Move::Down);
    }

    #[test]
    fn test_shifted_order_up() {
        // item moves from 5 to 2
        assert_eq!(shifted_order(1, 5, 2), 1);
        assert_eq!(shifted_order(2, 5, 2), 3);
        assert_eq!(shifted_order(4, 5, 2), 5);
        assert_eq!(shifted_order(6, 5, 2), 6);
    }

    #[test]
    fn test_shifted_order_down() {
        // item moves from 2 to 5
        assert_eq!(shifted_order(1, 2, 5), 1);
        assert_eq!(shifted_order(3, 2, 5), 2);
        assert_eq!(shifted_order(5, 2, 5), 4);
        assert_eq!(shifted_order(6, 2, 5), 6);
    }

    #[test]
    fn test_apply_move_up() {
        let mut todos = vec![todo(1, 1), todo(2, 2), todo(3, 3), todo(4, 4)];
        assert!(apply_move(&mut todos, 4, 4, 2));
        assert_eq!(orders(&todos), vec![(1, 1), (4, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn test_apply_move_down() {
        let mut todos = vec![todo(1, 1), todo(2, 2), todo(3, 3), todo(4, 4)];
        assert!(apply_move(&mut todos, 1, 1, 3));
        assert_eq!(orders(&todos), vec![(2, 1), (3, 2), (1, 3), (4, 4)]);
    }

    #[test]
    fn test_apply_move_noop() {
        let mut todos = vec![todo(1, 1), todo(2, 2)];
        assert!(!apply_move(&mut todos, 1, 1, 1));
        assert!(!apply_move(&mut todos, 99, 1, 2));
        assert_eq!(orders(&todos), vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_filter_matches() {
        let mut done = todo(1, 1);
        done.completed = true;
        let open = todo(2, 2);

        assert!(TodoFilter::All.matches(&done));
        assert!(TodoFilter::All.matches(&open));
        assert!(!TodoFilter::Active.matches(&done));
        assert!(TodoFilter::Active.matches(&open));
        assert!(TodoFilter::Completed.matches(&done));
        assert!(!TodoFilter::Completed.matches(&open));
        assert_eq!(remaining(&[done, open]), 1);
    }

    #[test]
    fn test_todo_json_uses_camel_case() {
        let mut item = todo(7, 3);
        item.deleted_at = Some(Utc::now());
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["displayOrder"], 3);
        assert!(json.get("createdAt").is_some());
        assert!(json["deletedAt"].is_string());
        assert!(item.is_trashed());
    }
}
