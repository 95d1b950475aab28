//! Terminal frontend for the query API.
//!
//! Supplies the network side (`UreqTransport`) and the host loop that
//! drives `query_core::QueryForm`.

pub mod app;
pub mod config;
pub mod transport;

pub use app::{run_interactive, run_once};
pub use config::Args;
pub use transport::UreqTransport;
