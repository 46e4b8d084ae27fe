//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test: the store's optimistic-update logic can be exercised with handmade
//! responses, no server required.
//!
//! All fields use owned types (`String`, `Vec`) so request values can be
//! carried around freely by the driver.

/// HTTP method for a request. The backend contract only needs these three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoApi::build_*` and `TodoStore::begin_*` methods. The caller
/// is responsible for executing this request against the network and
/// returning the corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to a `parse_*` or `finish_*` method. Drivers map transport-level failures
/// (connection refused, timeout) to `status: 0` with the error text as body,
/// so every failure flows through the same non-2xx path.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
