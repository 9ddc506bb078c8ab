//! HTTP CRUD service for todo items.
//!
//! `router` wires the `/todos` routes onto any `TodoRepository`; `app` and
//! `run` use a fresh in-memory repository.

use std::future::Future;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod repository;
pub mod todo;

pub use error::AppError;
pub use repository::{InMemoryTodoRepository, RepositoryError, SharedRepository, TodoRepository};
pub use todo::{NewTodo, Todo, TodoPatch};

pub fn router(repository: SharedRepository) -> Router {
    Router::new()
        .route(
            "/todos",
            get(controller::list_todos).post(controller::create_todo),
        )
        .route(
            "/todos/{id}",
            get(controller::get_todo)
                .patch(controller::patch_todo)
                .delete(controller::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(repository)
}

pub fn app() -> Router {
    router(InMemoryTodoRepository::new().shared())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `repository` until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(
    listener: TcpListener,
    repository: SharedRepository,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(repository))
        .with_graceful_shutdown(shutdown)
        .await
}
