//! Client core for the query frontend.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A `Transport` supplied by
//! the host executes the round-trip; `QueryForm` holds the view state.
//!
//! # Design
//! - `QueryClient` is stateless and holds only `base_url`.
//! - `Api` is the single typed entry point (`post`) used by the form.
//! - `QueryForm` is I/O-free: submissions split into `begin_submit` and
//!   `finish`, so any event loop can drive it.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod types;
pub mod view;

pub use api::{Api, Transport};
pub use client::{QueryClient, QUERY_PATH};
pub use error::ApiError;
pub use form::{QueryForm, SubmitOutcome, ERROR_PREFIX};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ApiResponse, QueryRequest, QueryResponse};
pub use view::render;
