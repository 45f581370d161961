//! Send requests to the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `RequestClient` over
//! real HTTP: the joke endpoint, header echo, non-2xx statuses, handle
//! re-creation after shutdown, and a refused connection.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::time::Duration;

use microrest_core::{ClientConfig, ClientError, RequestClient};

/// Start the mock server on a background runtime and return its address.
fn start_mock_server() -> SocketAddr {
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
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

/// An address nothing listens on.
fn closed_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

fn client_for(addr: SocketAddr) -> RequestClient {
    RequestClient::new(
        ClientConfig::default()
            .with_default_uri(&format!("http://{addr}/jokes/random"))
            .with_connect_timeout(Duration::from_secs(2)),
    )
}

#[test]
fn default_request_fetches_a_joke() {
    let addr = start_mock_server();
    let client = client_for(addr);

    let req = client.build_default_get();
    let response = client.send(&req).unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.header("Content-Type"), Some("application/json"));
    let joke: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert!(joke["value"].as_str().is_some_and(|v| !v.is_empty()));
    assert!(client.is_live());
}

#[test]
fn server_sees_user_agent_and_caller_headers() {
    let addr = start_mock_server();
    let client = client_for(addr);

    let uri = format!("http://{addr}/headers");
    let req = client
        .build_get_with_headers(Some(uri.as_str()), Some(&["X-Trace", "abc", "X-Dropped"][..]))
        .unwrap();
    let response = client.send(&req).unwrap();

    assert_eq!(response.status, 200);
    let echoed: BTreeMap<String, String> = serde_json::from_str(&response.body).unwrap();
    assert_eq!(echoed["user-agent"], client.config().user_agent);
    assert_eq!(echoed["x-trace"], "abc");
    assert!(!echoed.contains_key("x-dropped"));
}

#[test]
fn non_success_status_is_a_response() {
    let addr = start_mock_server();
    let client = client_for(addr);

    let uri = format!("http://{addr}/status/404");
    let req = client.build_get(Some(uri.as_str())).unwrap();
    let response = client.send(&req).unwrap();
    assert_eq!(response.status, 404);
    assert_eq!(response.body, "status 404");

    let uri = format!("http://{addr}/status/500");
    let req = client.build_get(Some(uri.as_str())).unwrap();
    assert_eq!(client.send_ignoring_errors(&req).map(|r| r.status), Some(500));
}

#[test]
fn send_after_shutdown_recreates_handle() {
    let addr = start_mock_server();
    let client = client_for(addr);
    let req = client.build_default_get();

    let first = client.get_or_create_client();
    assert_eq!(client.send(&req).unwrap().status, 200);

    client.shutdown();
    assert!(!client.is_live());

    assert_eq!(client.send(&req).unwrap().status, 200);
    let second = client.get_or_create_client();
    assert!(!std::sync::Arc::ptr_eq(&first, &second));
    client.shutdown();
}

#[test]
fn refused_connection_is_a_transport_error() {
    let addr = closed_addr();
    let client = client_for(addr);
    let req = client.build_default_get();

    let err = client.send(&req).unwrap_err();
    match err {
        ClientError::Transport { uri, .. } => {
            assert_eq!(uri, format!("http://{addr}/jokes/random"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }

    assert!(client.send_ignoring_errors(&req).is_none());
}

#[test]
fn malformed_target_fails_on_send_not_build() {
    let client = RequestClient::default();
    let req = client.build_get(Some("not even a uri")).unwrap();
    let err = client.send(&req).unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
}

#[test]
fn body_over_ten_mebibytes_is_read_in_full() {
    let addr = start_mock_server();
    let client = client_for(addr);
    let size = 11 * 1024 * 1024;

    let uri = format!("http://{addr}/bytes/{size}");
    let req = client.build_get(Some(uri.as_str())).unwrap();
    let response = client.send(&req).unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body.len(), size);
}

#[test]
fn configured_body_limit_is_enforced() {
    let addr = start_mock_server();
    let client = RequestClient::new(ClientConfig::default().with_max_body_size(16));

    let uri = format!("http://{addr}/bytes/64");
    let req = client.build_get(Some(uri.as_str())).unwrap();
    let err = client.send(&req).unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
}

#[test]
fn text_body_is_decoded_with_declared_charset() {
    let addr = start_mock_server();
    let client = client_for(addr);

    let uri = format!("http://{addr}/latin1");
    let req = client.build_get(Some(uri.as_str())).unwrap();
    let response = client.send(&req).unwrap();

    assert_eq!(response.body, "café");
}

#[test]
fn send_bytes_returns_the_raw_body() {
    let addr = start_mock_server();
    let client = client_for(addr);

    let uri = format!("http://{addr}/binary");
    let req = client.build_get(Some(uri.as_str())).unwrap();
    let response = client.send_bytes(&req).unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.header("content-type"), Some("application/octet-stream"));
    assert_eq!(response.body, mock_server::BINARY);
}

#[test]
fn send_bytes_reports_transport_errors() {
    let client = client_for(closed_addr());
    let req = client.build_default_get();
    assert!(matches!(
        client.send_bytes(&req).unwrap_err(),
        ClientError::Transport { .. }
    ));
}
