//! Domain DTOs for the task backend.
//!
//! # Design
//! Wire names follow the backend's document schema (`_id`, `task`); the Rust
//! field names stay idiomatic and serde renames bridge the gap. The types are
//! defined independently from the mock-server crate; integration tests catch
//! schema drift between the two.

use serde::{Deserialize, Serialize};

/// A single task as the backend represents it.
///
/// `id` is backend-assigned on creation. While a create request is in
/// flight, the store holds a `temp-` placeholder id that is replaced by the
/// authoritative id on the reconciling reload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "task")]
    pub text: String,
}

/// Request payload for creating a new task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    #[serde(rename = "task")]
    pub text: String,
}
