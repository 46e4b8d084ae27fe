//! In-memory stand-in for the task backend, matching its wire contract:
//! documents shaped `{_id, task}`, the collection at `/todos`, newest-first
//! listing, 201 on create, 204 on delete, 404 for unknown ids.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "task")]
    pub text: String,
}

#[derive(Deserialize)]
pub struct CreateTask {
    #[serde(rename = "task")]
    pub text: String,
}

// Newest task sits at the front, like a Mongo find sorted on _id descending.
pub type Db = Arc<RwLock<Vec<Task>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/todos", get(list_tasks).post(create_task))
        .route("/todos/{id}", axum::routing::delete(delete_task))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    let tasks = db.read().await;
    Json(tasks.clone())
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<CreateTask>,
) -> (StatusCode, Json<Task>) {
    let task = Task {
        id: Uuid::new_v4().to_string(),
        text: input.text,
    };
    db.write().await.insert(0, task.clone());
    (StatusCode::CREATED, Json(task))
}

async fn delete_task(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut tasks = db.write().await;
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    if tasks.len() < before {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_serializes_with_wire_names() {
        let task = Task {
            id: "abc123".to_string(),
            text: "Test".to_string(),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["_id"], "abc123");
        assert_eq!(json["task"], "Test");
    }

    #[test]
    fn task_roundtrips_through_json() {
        let task = Task {
            id: Uuid::new_v4().to_string(),
            text: "Roundtrip".to_string(),
        };
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, task.id);
        assert_eq!(back.text, task.text);
    }

    #[test]
    fn create_task_reads_the_task_field() {
        let input: CreateTask = serde_json::from_str(r#"{"task":"Buy milk"}"#).unwrap();
        assert_eq!(input.text, "Buy milk");
    }

    #[test]
    fn create_task_rejects_missing_task_field() {
        let result: Result<CreateTask, _> = serde_json::from_str(r#"{"title":"wrong"}"#);
        assert!(result.is_err());
    }
}
