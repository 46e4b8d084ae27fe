//! Client core for the task backend: a local mirror of a remote to-do list
//! with optimistic updates.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trips, making the core fully deterministic and testable.
//!
//! # Design
//! - `TodoApi` is stateless — it holds only `base_url` and splits each
//!   backend operation into `build_*` / `parse_*`.
//! - `TodoStore` holds the mirrored task list and splits each user operation
//!   into `begin_*` / `finish_*` at the network boundary, applying the
//!   optimistic mutation up front and rolling back or reconciling on
//!   failure.
//! - Types use owned `String` / `Vec` fields; DTOs are defined independently
//!   from the mock-server crate, and integration tests catch schema drift.

pub mod api;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use api::TodoApi;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{Notice, Outcome, PendingAdd, TodoStore};
pub use types::{CreateTask, Task};
