//! To-do API routes.

use axum::{
    Json,
    extract::{Path, State},
};
use core_types::Todo;
use store::ReorderOutcome;
use web_types::{CreateTodoRequest, MessageResponse, ReorderRequest, UpdateTodoRequest};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/todos - List active todos in display order.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.store().await.list()?;
    Ok(Json(todos))
}

/// GET /api/todos/trashed - List todos in the trash.
pub async fn list_trashed(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.store().await.list_trashed()?;
    Ok(Json(todos))
}

/// POST /api/todos - Create a todo.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<Json<Todo>, AppError> {
    let title = validate_title(&req.title)?;

    let todo = state
        .store()
        .await
        .create(title, req.completed, req.display_order)?;

    tracing::info!(id = todo.id, order = todo.display_order, "created todo");
    Ok(Json(todo))
}

/// PUT /api/todos/:id - Replace title and completion of a todo.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, AppError> {
    let title = validate_title(&req.title)?;

    let todo = state.store().await.update(id, title, req.completed)?;

    tracing::info!(id, completed = todo.completed, "updated todo");
    Ok(Json(todo))
}

/// PUT /api/todos/order - Move a todo to a new display order.
pub async fn reorder_todos(
    State(state): State<AppState>,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!(
        item_id = req.item_id,
        old = req.old_index,
        new = req.new_index,
        "reorder requested"
    );

    let outcome = state
        .store()
        .await
        .reorder(req.item_id, req.old_index, req.new_index)?;

    let message = match outcome {
        ReorderOutcome::Unchanged => "Todo order unchanged",
        ReorderOutcome::Moved => "Todo order updated successfully",
    };
    Ok(Json(MessageResponse::new(message)))
}

/// DELETE /api/todos/:id - Move a todo to the trash.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store().await.trash(id)?;

    tracing::info!(id, "moved todo to trash");
    Ok(Json(MessageResponse::new("todo deleted")))
}

/// PUT /api/todos/:id/restore - Take a todo back out of the trash.
pub async fn restore_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, AppError> {
    let todo = state.store().await.restore(id)?;

    tracing::info!(id, "restored todo");
    Ok(Json(todo))
}

/// DELETE /api/todos/:id/permanent - Delete a todo for good.
pub async fn purge_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store().await.purge(id)?;

    tracing::info!(id, "permanently deleted todo");
    Ok(Json(MessageResponse::new("Todo permanently deleted")))
}

fn validate_title(title: &str) -> Result<&str, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }
    Ok(title)
}
