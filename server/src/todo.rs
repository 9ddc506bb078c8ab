//! The todo entity and its request payloads.

use serde::{Deserialize, Serialize};

/// A stored todo item. `id` is assigned by the repository and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub order: Option<i64>,
}

impl Todo {
    pub fn new(id: i64, title: impl Into<String>, completed: bool, order: Option<i64>) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
            order,
        }
    }

    /// Apply the fields present in `patch`. The id is left alone.
    pub fn apply(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(order) = patch.order {
            self.order = Some(order);
        }
    }
}

/// A todo that has not been saved yet, so it has no id.
///
/// Also the body accepted by `POST /todos`; an `id` sent by the client is
/// ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub order: Option<i64>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
            order: None,
        }
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    pub(crate) fn into_todo(self, id: i64) -> Todo {
        Todo::new(id, self.title, self.completed, self.order)
    }
}

/// Body of `PATCH /todos/{id}`. Only the fields present in the JSON are
/// applied; the target id always comes from the path.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub order: Option<i64>,
}
