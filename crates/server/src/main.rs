//! To-do list web server.
//!
//! Serves the REST API under `/api/todos` and the built front end for
//! every other path.

mod config;
mod error;
mod routes;
mod state;

use anyhow::Context;
use axum::{
    Router,
    extract::OriginalUri,
    http::{HeaderValue, Method, header},
    routing::{delete, get, put},
};
use clap::Parser;
use store::TodoStore;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use error::AppError;
use routes::{
    create_todo, delete_todo, list_todos, list_trashed, purge_todo, reorder_todos, restore_todo,
    update_todo,
};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=debug,store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    let store = TodoStore::open(&config.database)
        .with_context(|| format!("opening database {}", config.database.display()))?;
    tracing::info!(database = %config.database.display(), "database migrated");

    let app = build_app(AppState::new(store), &config)?;

    let addr = config.addr();
    tracing::info!("server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// REST routes only, without CORS or static files.
fn api_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/", get(list_todos).post(create_todo))
        .route("/todos/trashed", get(list_trashed))
        .route("/todos/order", put(reorder_todos))
        .route("/todos/:id", put(update_todo).delete(delete_todo))
        .route("/todos/:id/restore", put(restore_todo))
        .route("/todos/:id/permanent", delete(purge_todo))
        .fallback(api_not_found);

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Unknown API paths get a JSON 404 instead of the front end.
async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("No API route for {}", uri.path()))
}

/// Full application: API, CORS for the dev front end, request tracing and
/// the single-page front end as fallback.
fn build_app(state: AppState, config: &Config) -> anyhow::Result<Router> {
    let origin: HeaderValue = config
        .allowed_origin
        .parse()
        .with_context(|| format!("invalid allowed origin {:?}", config.allowed_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH]);

    // Client-side routes such as /trash resolve to index.html.
    let index = config.static_dir.join("index.html");
    let frontend = ServeDir::new(&config.static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(index));

    Ok(api_router(state)
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use std::ffi::OsStr;
    use tempfile::tempdir;
    use tower::ServiceExt;

    fn config(static_dir: &std::path::Path) -> Config {
        Config::try_parse_from([
            OsStr::new("todo-server"),
            OsStr::new("--static-dir"),
            static_dir.as_os_str(),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_client_routes_serve_index() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<div id=\"app\"></div>").unwrap();

        let state = AppState::new(TodoStore::open_in_memory().unwrap());
        let app = build_app(state, &config(dir.path())).unwrap();

        for path in ["/", "/todo-two", "/drag-drop", "/trash"] {
            let response = app
                .clone()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{path}");

            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert!(String::from_utf8_lossy(&body).contains("id=\"app\""));
        }
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let dir = tempdir().unwrap();
        let state = AppState::new(TodoStore::open_in_memory().unwrap());
        let app = build_app(state, &config(dir.path())).unwrap();

        let request = Request::get("/api/todos")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_404() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<div id=\"app\"></div>").unwrap();

        let state = AppState::new(TodoStore::open_in_memory().unwrap());
        let app = build_app(state, &config(dir.path())).unwrap();

        let response = app
            .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: web_types::ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code.as_deref(), Some("NOT_FOUND"));
        assert!(error.error.contains("/api/nope"));
    }

    #[test]
    fn test_rejects_invalid_origin() {
        let dir = tempdir().unwrap();
        let mut config = config(dir.path());
        config.allowed_origin = "bad\norigin".into();

        let state = AppState::new(TodoStore::open_in_memory().unwrap());
        assert!(build_app(state, &config).is_err());
    }
}
