//! HTTP client for the to-do REST API.

use std::fmt;
use std::future::Future;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_types::{
    ApiError, CreateTodoRequest, MessageResponse, ReorderRequest, Todo, UpdateTodoRequest,
};
use yew::Callback;

/// API origin, empty when the front end is served by the API server itself.
const API_ORIGIN: &str = match option_env!("TODO_API_ORIGIN") {
    Some(origin) => origin,
    None => "",
};

/// Failure of an API call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiClientError {
    /// The request never produced a usable response.
    Network(String),
    /// The server answered with an error status.
    Server { status: u16, message: String },
}

impl fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiClientError::Network(msg) => write!(f, "network error: {msg}"),
            ApiClientError::Server { status, message } => write!(f, "{status}: {message}"),
        }
    }
}

impl From<gloo_net::Error> for ApiClientError {
    fn from(err: gloo_net::Error) -> Self {
        ApiClientError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiClientError>;

fn url(path: &str) -> String {
    format!("{API_ORIGIN}/api/todos{path}")
}

async fn read<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if resp.ok() {
        return Ok(resp.json::<T>().await?);
    }

    let status = resp.status();
    let status_text = resp.status_text();
    let message = resp
        .json::<ApiError>()
        .await
        .map(|body| body.error)
        .unwrap_or(status_text);
    Err(ApiClientError::Server { status, message })
}

/// GET /api/todos
pub async fn fetch_todos() -> Result<Vec<Todo>> {
    read(Request::get(&url("")).send().await?).await
}

/// GET /api/todos/trashed
pub async fn fetch_trashed() -> Result<Vec<Todo>> {
    read(Request::get(&url("/trashed")).send().await?).await
}

/// POST /api/todos
pub async fn create_todo(title: String) -> Result<Todo> {
    let body = CreateTodoRequest::new(title);
    read(Request::post(&url("")).json(&body)?.send().await?).await
}

/// PUT /api/todos/:id
pub async fn update_todo(id: i64, body: UpdateTodoRequest) -> Result<Todo> {
    read(Request::put(&url(&format!("/{id}"))).json(&body)?.send().await?).await
}

/// PUT /api/todos/order
pub async fn reorder(body: ReorderRequest) -> Result<MessageResponse> {
    read(Request::put(&url("/order")).json(&body)?.send().await?).await
}

/// DELETE /api/todos/:id
pub async fn trash_todo(id: i64) -> Result<MessageResponse> {
    read(Request::delete(&url(&format!("/{id}"))).send().await?).await
}

/// PUT /api/todos/:id/restore
pub async fn restore_todo(id: i64) -> Result<Todo> {
    read(Request::put(&url(&format!("/{id}/restore"))).send().await?).await
}

/// DELETE /api/todos/:id/permanent
pub async fn purge_todo(id: i64) -> Result<MessageResponse> {
    read(Request::delete(&url(&format!("/{id}/permanent"))).send().await?).await
}

/// Report a failed call on the browser console.
pub fn log_error(context: &str, err: &ApiClientError) {
    web_sys::console::error_1(&format!("{context}: {err}").into());
}

/// Run a mutating call in the background and reload the list once it
/// has finished, successful or not.
pub fn spawn_mutation<T, F>(context: &'static str, call: F, reload: Callback<()>)
where
    T: 'static,
    F: Future<Output = Result<T>> + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = call.await {
            log_error(context, &err);
        }
        reload.emit(());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        assert_eq!(url(""), format!("{API_ORIGIN}/api/todos"));
        assert_eq!(url("/7/restore"), format!("{API_ORIGIN}/api/todos/7/restore"));
    }

    #[test]
    fn test_error_display() {
        let err = ApiClientError::Server {
            status: 404,
            message: "Todo 7 not found".into(),
        };
        assert_eq!(err.to_string(), "404: Todo 7 not found");
    }
}
