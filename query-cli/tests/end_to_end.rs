//! Form submissions against the live mock server.
//!
//! Starts the mock server on a random port, then drives `QueryForm` through
//! `UreqTransport` over real HTTP. Validates that the core's request
//! building and response parsing agree with the actual server.

use std::sync::Arc;

use query_cli::{run_once, UreqTransport};
use query_core::{Api, QueryForm, SubmitOutcome};

/// Start the mock server on a random port and return its base URL.
fn spawn_server(responder: mock_server::Responder) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, responder).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// A base URL on which nothing is listening.
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[test]
fn submit_displays_server_response() {
    let base_url = spawn_server(Arc::new(mock_server::echo));
    let api = Api::new(&base_url, UreqTransport::new());
    let mut form = QueryForm::new();

    // Step 1: fresh form is idle.
    assert!(!form.is_loading());

    // Step 2: submit and get the echo back.
    form.set_query("What's the weather?");
    assert_eq!(form.submit(&api), SubmitOutcome::Succeeded);
    assert_eq!(form.response(), "You asked: What's the weather?");
    assert!(!form.is_loading());

    // Step 3: resubmit; the previous response is cleared while pending.
    form.set_query("second");
    let request = form.begin_submit().unwrap();
    assert_eq!(form.response(), "");
    let outcome = api
        .post::<query_core::QueryResponse, _>(query_core::QUERY_PATH, &request)
        .map(|res| res.data);
    form.finish(outcome);
    assert_eq!(form.response(), "You asked: second");
    assert!(!form.is_loading());
}

#[test]
fn server_receives_query_verbatim() {
    let base_url = spawn_server(Arc::new(|q: &str| format!("[{q}]")));
    let api = Api::new(&base_url, UreqTransport::new());
    let mut form = QueryForm::new();

    form.set_query("  spaced \"quoted\" ünïcødé  ");
    form.submit(&api);

    assert_eq!(form.response(), "[  spaced \"quoted\" ünïcødé  ]");
}

#[test]
fn unknown_route_is_reported_as_status_error() {
    let base_url = spawn_server(Arc::new(mock_server::echo));
    let api = Api::new(&format!("{base_url}/missing"), UreqTransport::new());
    let mut form = QueryForm::new();

    assert_eq!(form.submit(&api), SubmitOutcome::Failed);

    assert_eq!(form.response(), "Error: Request failed with status code 404");
    assert!(!form.is_loading());
}

#[test]
fn unreachable_backend_is_reported_and_loading_resets() {
    let api = Api::new(&closed_port_url(), UreqTransport::new());
    let mut form = QueryForm::new();
    form.set_query("anyone there?");

    form.submit(&api);

    assert!(form.response().starts_with("Error: "), "got {:?}", form.response());
    assert!(form.response().len() > "Error: ".len());
    assert!(!form.is_loading());
    assert!(form.can_submit());
}

#[test]
fn one_shot_mode_prints_only_the_response() {
    let base_url = spawn_server(Arc::new(mock_server::echo));
    let api = Api::new(&base_url, UreqTransport::new());
    let mut out = Vec::new();

    let ok = run_once(&api, "ping", &mut out).unwrap();

    assert!(ok);
    assert_eq!(String::from_utf8(out).unwrap(), "You asked: ping\n");
}
