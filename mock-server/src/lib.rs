use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
}

/// Produces the answer text for a query. Stands in for the real backend's
/// tool-calling LLM pipeline, which is not part of this workspace.
pub type Responder = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Default responder: repeats the query back.
pub fn echo(query: &str) -> String {
    format!("You asked: {query}")
}

pub fn app() -> Router {
    app_with(Arc::new(echo))
}

pub fn app_with(responder: Responder) -> Router {
    Router::new()
        .route("/query", post(query))
        .with_state(responder)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, responder: Responder) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(responder)).await
}

async fn query(
    State(responder): State<Responder>,
    Json(input): Json<QueryRequest>,
) -> Json<QueryResponse> {
    tracing::info!(query = %input.query, "processing query");
    Json(QueryResponse {
        response: responder(&input.query),
    })
}
