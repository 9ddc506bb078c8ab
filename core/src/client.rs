//! Request builder and response parser for the todo API.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo, TodoPatch};

const JSON_HEADER: (&str, &str) = ("content-type", "application/json");

/// Stateless client for the todo API. Holds only the base URL.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/todos".to_string(), None)
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, format!("/todos/{id}"), None)
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(ApiError::Serialization)?;
        Ok(self.request(HttpMethod::Post, "/todos".to_string(), Some(body)))
    }

    pub fn build_patch_todo(&self, id: i64, patch: &TodoPatch) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(patch).map_err(ApiError::Serialization)?;
        Ok(self.request(HttpMethod::Patch, format!("/todos/{id}"), Some(body)))
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/todos/{id}"), None)
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        decode(&response)
    }

    pub fn parse_patch_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        let headers = match body {
            Some(_) => vec![(JSON_HEADER.0.to_string(), JSON_HEADER.1.to_string())],
            None => Vec::new(),
        };
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers,
            body,
        }
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => Err(ApiError::BadRequest(response.body.clone())),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_uses_numeric_id() {
        let req = client().build_get_todo(1);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/todos/1");
    }

    #[test]
    fn build_create_todo_sends_json() {
        let input = NewTodo {
            title: "Buy milk".to_string(),
            completed: false,
            order: None,
        };
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["completed"], false);
        assert!(body.get("order").is_none());
    }

    #[test]
    fn build_patch_todo_omits_unset_fields() {
        let patch = TodoPatch {
            completed: Some(true),
            ..TodoPatch::default()
        };
        let req = client().build_patch_todo(3, &patch).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.url, "http://localhost:3000/todos/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "completed": true }));
    }

    #[test]
    fn build_delete_todo_has_no_body() {
        let req = client().build_delete_todo(1);
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let todos = client()
            .parse_list_todos(response(
                200,
                r#"[{"id":1,"title":"Test","completed":false,"order":null}]"#,
            ))
            .unwrap();
        assert_eq!(
            todos,
            vec![Todo {
                id: 1,
                title: "Test".to_string(),
                completed: false,
                order: None,
            }]
        );
    }

    #[test]
    fn parse_get_todo_not_found() {
        let err = client().parse_get_todo(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_todo_requires_201() {
        let body = r#"{"id":1,"title":"New","completed":false,"order":null}"#;
        let err = client().parse_create_todo(response(200, body)).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 200, .. }));
        let todo = client().parse_create_todo(response(201, body)).unwrap();
        assert_eq!(todo.title, "New");
    }

    #[test]
    fn parse_patch_todo_bad_request() {
        let err = client()
            .parse_patch_todo(response(400, "missing body"))
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref body) if body == "missing body"));
    }

    #[test]
    fn parse_delete_todo_expects_200() {
        assert!(client().parse_delete_todo(response(200, "")).is_ok());
        let err = client().parse_delete_todo(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let req = TodoClient::new("http://localhost:3000/").build_list_todos();
        assert_eq!(req.url, "http://localhost:3000/todos");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client()
            .parse_list_todos(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
