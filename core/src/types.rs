//! Wire DTOs for the query API.
//!
//! These mirror the mock-server's schema but are defined independently;
//! the end-to-end tests catch any drift between the two crates.

use serde::{Deserialize, Serialize};

/// Body of `POST /query`. The user's input is sent verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryRequest {
    pub query: String,
}

/// Successful answer from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryResponse {
    pub response: String,
}

/// Success envelope returned by `Api::post`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}
