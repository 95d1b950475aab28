//! Pre-configured HTTP client wrapper.
//!
//! `Api` pairs a `QueryClient` (which knows the base URL and the JSON
//! conventions) with a `Transport` (which knows how to reach the network).
//! It exposes a single typed `post` operation. There are no interceptors,
//! auth headers or retries.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::QueryClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::ApiResponse;

/// Executes one HTTP round-trip.
///
/// Implementations return non-2xx responses as data; only failures that
/// produce no response at all map to `ApiError::Transport`.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

#[derive(Debug, Clone)]
pub struct Api<T> {
    client: QueryClient,
    transport: T,
}

impl<T: Transport> Api<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: QueryClient::new(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// `POST` `body` as JSON to `path` and decode the reply as `R`.
    pub fn post<R, B>(&self, path: &str, body: &B) -> Result<ApiResponse<R>, ApiError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.client.build_post(path, body)?;
        let response = self.transport.execute(request)?;
        let status = response.status;
        let data = self.client.parse_json(response)?;
        Ok(ApiResponse { status, data })
    }
}
