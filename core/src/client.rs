//! Stateless HTTP request builder and response parser for the query API.
//!
//! # Design
//! `QueryClient` holds only a `base_url` and carries no mutable state between
//! calls. Building a request and parsing its response are separate steps so
//! the network round-trip stays outside the core.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{QueryRequest, QueryResponse};

/// Path of the backend's query endpoint.
pub const QUERY_PATH: &str = "/query";

/// Synchronous, stateless client for the query API.
#[derive(Debug, Clone)]
pub struct QueryClient {
    base_url: String,
}

impl QueryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a JSON `POST` to `path` relative to the base URL.
    pub fn build_post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "building POST request");
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Deserialize a 2xx response body as `T`.
    pub fn parse_json<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn build_query(&self, input: &QueryRequest) -> Result<HttpRequest, ApiError> {
        self.build_post(QUERY_PATH, input)
    }

    pub fn parse_query(&self, response: HttpResponse) -> Result<QueryResponse, ApiError> {
        self.parse_json(response)
    }
}

/// Map non-2xx status codes to `ApiError::Status`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
