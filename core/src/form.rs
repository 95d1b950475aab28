//! The query form: one text field, one submit control, one output area.
//!
//! `QueryForm` owns all UI state and knows nothing about how it is drawn or
//! how the host schedules work. A submission is split into `begin_submit`
//! and `finish` so an event-driven host can render the pending state while
//! the request is in flight; `submit` runs both halves around a blocking
//! `Api` call.

use tracing::{debug, warn};

use crate::api::{Api, Transport};
use crate::client::QUERY_PATH;
use crate::error::ApiError;
use crate::types::{ApiResponse, QueryRequest, QueryResponse};

/// Prefix shown in the output area when a request fails.
pub const ERROR_PREFIX: &str = "Error: ";

/// What happened to a call to `QueryForm::submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submit control was disabled; nothing was sent.
    Disabled,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryForm {
    query: String,
    response: String,
    loading: bool,
}

impl QueryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Input event: the field's new contents, stored untouched.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    /// Submit event. Returns the request to send, or `None` when the control
    /// is disabled because a request is already pending.
    pub fn begin_submit(&mut self) -> Option<QueryRequest> {
        if !self.can_submit() {
            debug!("submit ignored while a request is pending");
            return None;
        }
        self.loading = true;
        self.response.clear();
        debug!(query_len = self.query.len(), "query submitted");
        Some(QueryRequest {
            query: self.query.clone(),
        })
    }

    /// Apply the outcome of a request. Always leaves the form idle.
    ///
    /// Outcomes are applied in the order they arrive, so a late reply to an
    /// earlier request overwrites a newer one.
    pub fn finish(&mut self, outcome: Result<QueryResponse, ApiError>) {
        match outcome {
            Ok(reply) => {
                debug!(response_len = reply.response.len(), "query resolved");
                self.response = reply.response;
            }
            Err(e) => {
                warn!(error = %e, "query failed");
                self.response = format!("{ERROR_PREFIX}{e}");
            }
        }
        self.loading = false;
    }

    /// Full submission cycle against `api`.
    pub fn submit<T: Transport>(&mut self, api: &Api<T>) -> SubmitOutcome {
        let Some(request) = self.begin_submit() else {
            return SubmitOutcome::Disabled;
        };
        let outcome = api
            .post::<QueryResponse, _>(QUERY_PATH, &request)
            .map(|res: ApiResponse<QueryResponse>| res.data);
        let result = if outcome.is_ok() {
            SubmitOutcome::Succeeded
        } else {
            SubmitOutcome::Failed
        };
        self.finish(outcome);
        result
    }
}
