//! Storage for todos.
//!
//! Handlers only see the `TodoRepository` trait, shared as
//! `Arc<dyn TodoRepository>`, so the in-memory store can be swapped for a
//! persistent one without touching the routes.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::todo::{NewTodo, Todo};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("todo {0} does not exist")]
    NotFound(i64),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Every stored todo, in the repository's iteration order.
    async fn get_all(&self) -> RepositoryResult<Vec<Todo>>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Todo>>;

    /// Store a new todo under a freshly assigned id.
    async fn save(&self, todo: NewTodo) -> RepositoryResult<Todo>;

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;

    /// Replace the stored todo carrying the same id.
    async fn update(&self, todo: Todo) -> RepositoryResult<Todo>;
}

pub type SharedRepository = Arc<dyn TodoRepository>;

#[derive(Debug)]
struct Store {
    todos: BTreeMap<i64, Todo>,
    next_id: i64,
}

/// Todos held in a `BTreeMap` behind one lock. Iteration is by ascending id
/// and ids are never reused, even after a delete.
#[derive(Debug)]
pub struct InMemoryTodoRepository {
    store: RwLock<Store>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::with_todos(Vec::new())
    }

    /// Seed the repository with todos that already carry ids. New ids
    /// continue after the largest seeded one.
    pub fn with_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        let todos: BTreeMap<i64, Todo> = todos.into_iter().map(|todo| (todo.id, todo)).collect();
        let next_id = todos.keys().next_back().map_or(1, |last| last + 1);
        Self {
            store: RwLock::new(Store { todos, next_id }),
        }
    }

    pub fn shared(self) -> SharedRepository {
        Arc::new(self)
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Todo>> {
        let store = self.store.read().await;
        Ok(store.todos.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Todo>> {
        let store = self.store.read().await;
        Ok(store.todos.get(&id).cloned())
    }

    async fn save(&self, todo: NewTodo) -> RepositoryResult<Todo> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;
        let todo = todo.into_todo(id);
        store.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        let mut store = self.store.write().await;
        store
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, todo: Todo) -> RepositoryResult<Todo> {
        let mut store = self.store.write().await;
        let slot = store
            .todos
            .get_mut(&todo.id)
            .ok_or(RepositoryError::NotFound(todo.id))?;
        *slot = todo.clone();
        Ok(todo)
    }
}
