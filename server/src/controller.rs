//! Handlers for the `/todos` routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, JsonBody},
    repository::SharedRepository,
    todo::{NewTodo, Todo, TodoPatch},
};

type Result<T> = std::result::Result<T, AppError>;

pub async fn list_todos(State(repository): State<SharedRepository>) -> Result<Json<Vec<Todo>>> {
    let todos = repository.get_all().await?;
    tracing::debug!(count = todos.len(), "listed todos");
    Ok(Json(todos))
}

pub async fn get_todo(
    State(repository): State<SharedRepository>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>> {
    find_existing(&repository, id).await.map(Json)
}

pub async fn create_todo(
    State(repository): State<SharedRepository>,
    JsonBody(input): JsonBody<NewTodo>,
) -> Result<(StatusCode, Json<Todo>)> {
    let todo = repository.save(input).await?;
    tracing::info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn delete_todo(
    State(repository): State<SharedRepository>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    find_existing(&repository, id).await?;
    repository.delete_by_id(id).await?;
    tracing::info!(id, "deleted todo");
    Ok(StatusCode::OK)
}

/// The body is decoded before the lookup, so a missing body is a 400 even
/// for an unknown id. A decodable body against an unknown id is a 404.
pub async fn patch_todo(
    State(repository): State<SharedRepository>,
    Path(id): Path<i64>,
    JsonBody(patch): JsonBody<TodoPatch>,
) -> Result<Json<Todo>> {
    let mut todo = find_existing(&repository, id).await?;
    todo.apply(patch);
    let todo = repository.update(todo).await?;
    tracing::info!(id, "updated todo");
    Ok(Json(todo))
}

async fn find_existing(repository: &SharedRepository, id: i64) -> Result<Todo> {
    repository
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(id))
}
