//! Client core for the todo HTTP API.
//!
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller runs the round-trip, which keeps this
//! crate deterministic and free of any HTTP stack.
//!
//! Each operation is a `build_*` / `parse_*` pair on `TodoClient`; the DTOs
//! in `types` are declared independently from the server crate.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{NewTodo, Todo, TodoPatch};
