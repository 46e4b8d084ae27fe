//! Stateless HTTP request builder and response parser for the task backend.
//!
//! # Design
//! `TodoApi` holds only a `base_url` and carries no mutable state between
//! calls. Each backend operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! this layer deterministic and free of I/O dependencies.
//!
//! The backend addresses the collection at `base_url` itself (list and
//! create) and individual tasks at `base_url/{id}` (delete). Any 2xx status
//! counts as success.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTask, Task};

/// Stateless client for the task backend's three operations.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.base_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &CreateTask) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.base_url.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Task>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// A successful create is any 2xx; the body is not inspected because the
    /// store reconciles via a full reload rather than trusting the response.
    pub fn parse_create(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

/// Map non-2xx status codes to `ApiError::HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> TodoApi {
        TodoApi::new("http://localhost:3000/todos")
    }

    #[test]
    fn build_list_produces_correct_request() {
        let req = api().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_produces_correct_request() {
        let input = CreateTask {
            text: "Buy milk".to_string(),
        };
        let req = api().build_create(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"task": "Buy milk"}));
    }

    #[test]
    fn build_delete_produces_correct_request() {
        let req = api().build_delete("abc123");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/todos/abc123");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"_id":"1","task":"Test"}]"#.to_string(),
        };
        let tasks = api().parse_list(response).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "1");
        assert_eq!(tasks[0].text, "Test");
    }

    #[test]
    fn parse_list_bad_json() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = api().parse_list(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_create_accepts_any_2xx() {
        for status in [200, 201, 204] {
            let response = HttpResponse {
                status,
                headers: Vec::new(),
                body: String::new(),
            };
            assert!(api().parse_create(response).is_ok(), "status {status}");
        }
    }

    #[test]
    fn parse_create_wrong_status() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = api().parse_create(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_delete_success() {
        let response = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(api().parse_delete(response).is_ok());
    }

    #[test]
    fn parse_delete_transport_failure() {
        let response = HttpResponse {
            status: 0,
            headers: Vec::new(),
            body: "connection refused".to_string(),
        };
        let err = api().parse_delete(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 0, .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let api = TodoApi::new("http://localhost:3000/todos/");
        let req = api.build_list();
        assert_eq!(req.path, "http://localhost:3000/todos");
    }
}
