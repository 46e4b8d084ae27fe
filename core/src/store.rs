//! Stateful task-list synchronizer with optimistic updates.
//!
//! # Design
//! `TodoStore` mirrors the backend's task list into a local `Vec<Task>` and
//! implements each user operation as a `begin_*` / `finish_*` pair split at
//! the network boundary, the same way `TodoApi` splits build from parse.
//! `begin_*` applies the optimistic local mutation and returns the request(s)
//! the driver must execute; `finish_*` consumes the response and returns a
//! user-facing `Notice` plus, where reconciliation is needed, a follow-up
//! list request to feed back through `finish_load`.
//!
//! Failure policy per operation:
//! - create: roll back the optimistic insert by its temp id;
//! - delete: resynchronize with a full reload;
//! - load: leave prior state untouched;
//! - clear_all: state clears regardless, but the count of failed deletions
//!   is surfaced in the notice rather than swallowed.
//!
//! The store never performs I/O and holds no locks; overlapping operations
//! race exactly as overlapping requests from a UI would.

use uuid::Uuid;

use crate::api::TodoApi;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTask, Task};

/// A transient user-facing notification, the analog of a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }
}

/// Result of a completed mutation: what to tell the user, and whether local
/// state must be reconciled with the backend via a follow-up list request.
#[derive(Debug)]
pub struct Outcome {
    pub notice: Notice,
    pub reload: Option<HttpRequest>,
}

/// An in-flight optimistic create. The driver executes `request` and passes
/// `temp_id` back to `finish_add` so a failure can roll back the right entry.
#[derive(Debug)]
pub struct PendingAdd {
    pub temp_id: String,
    pub request: HttpRequest,
}

/// Local mirror of the backend task list.
#[derive(Debug)]
pub struct TodoStore {
    api: TodoApi,
    tasks: Vec<Task>,
}

impl TodoStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            api: TodoApi::new(base_url),
            tasks: Vec::new(),
        }
    }

    /// The currently displayed list, newest-first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Request a full fetch of the backend list.
    pub fn begin_load(&self) -> HttpRequest {
        self.api.build_list()
    }

    /// Replace local state wholesale with the fetched list. On failure the
    /// prior state is left untouched; callers on the silent paths (initial
    /// load, reload after a failed delete) discard the error.
    pub fn finish_load(&mut self, response: HttpResponse) -> Result<(), ApiError> {
        self.tasks = self.api.parse_list(response)?;
        Ok(())
    }

    /// Validate and optimistically insert a new task at the front.
    ///
    /// Empty or whitespace-only input is rejected with an error notice and
    /// no state change; no request is produced, so nothing hits the network.
    pub fn begin_add(&mut self, text: &str) -> Result<PendingAdd, Notice> {
        if text.trim().is_empty() {
            return Err(Notice::Error("Task cannot be empty!".to_string()));
        }
        let input = CreateTask {
            text: text.to_string(),
        };
        let request = self
            .api
            .build_create(&input)
            .map_err(|e| Notice::Error(format!("Failed to add task: {e}")))?;
        let temp_id = format!("temp-{}", Uuid::new_v4());
        self.tasks.insert(
            0,
            Task {
                id: temp_id.clone(),
                text: text.to_string(),
            },
        );
        Ok(PendingAdd { temp_id, request })
    }

    /// Complete an optimistic create. Success hands back a reload request so
    /// the temp placeholder gets replaced by the backend's authoritative
    /// list; failure rolls the placeholder back.
    pub fn finish_add(&mut self, temp_id: &str, response: HttpResponse) -> Outcome {
        match self.api.parse_create(response) {
            Ok(()) => Outcome {
                notice: Notice::Success("Task added".to_string()),
                reload: Some(self.begin_load()),
            },
            Err(e) => {
                self.tasks.retain(|task| task.id != temp_id);
                Outcome {
                    notice: Notice::Error(format!("Failed to add task: {e}")),
                    reload: None,
                }
            }
        }
    }

    /// Optimistically remove a task and return its delete request.
    ///
    /// Removing an id not present locally is a no-op on state, but the
    /// request is still issued so the backend converges.
    pub fn begin_remove(&mut self, id: &str) -> HttpRequest {
        self.tasks.retain(|task| task.id != id);
        self.api.build_delete(id)
    }

    /// Complete a delete. Failure hands back a reload request; running it
    /// through `finish_load` restores local state to backend truth.
    pub fn finish_remove(&mut self, response: HttpResponse) -> Outcome {
        match self.api.parse_delete(response) {
            Ok(()) => Outcome {
                notice: Notice::Success("Task deleted".to_string()),
                reload: None,
            },
            Err(e) => Outcome {
                notice: Notice::Error(format!("Failed to delete task: {e}")),
                reload: Some(self.begin_load()),
            },
        }
    }

    /// One delete request per task, in current list order. The driver must
    /// execute these strictly one at a time, completing each round-trip
    /// before starting the next.
    pub fn begin_clear_all(&self) -> Vec<HttpRequest> {
        self.tasks
            .iter()
            .map(|task| self.api.build_delete(&task.id))
            .collect()
    }

    /// Clear local state unconditionally and report the result. `failed` is
    /// the number of deletions that did not get a 2xx; a nonzero count is
    /// surfaced to the user because the backend may still hold those tasks.
    pub fn finish_clear_all(&mut self, failed: usize) -> Notice {
        self.tasks.clear();
        if failed == 0 {
            Notice::Success("All tasks cleared!".to_string())
        } else {
            Notice::Error(format!(
                "Cleared locally, but {failed} deletion(s) failed on the backend"
            ))
        }
    }
}
