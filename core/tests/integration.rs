//! End-to-end tests over real HTTP against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the full pipeline —
//! query augmentation, body encoding, assembly, and the default reqwest
//! transport — through actual network round-trips.

use rest_core::{HttpMethod, Outcome, RestClient};

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        mock_server::run(listener).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn list_users_with_query_parameter() {
    let base = start_server().await;
    let mut client = RestClient::new();
    client.query_parameters.add("page", "2");

    let outcome = client
        .execute(&format!("{base}/api/users"), HttpMethod::Get)
        .await;

    assert!(outcome.error.is_none());
    let response = outcome.response.expect("expected a response");
    assert_eq!(response.http_status_code, 200);
    assert!(response.headers.get("content-type").is_some());

    let page: serde_json::Value =
        serde_json::from_slice(outcome.data.as_deref().unwrap()).unwrap();
    assert_eq!(page["page"], 2);
    assert_eq!(page["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn create_user_with_json_body() {
    let base = start_server().await;
    let mut client = RestClient::new();
    client.request_headers.add("Content-Type", "application/json");
    client.body_parameters.add("name", "Frank Bara");
    client.body_parameters.add("job", "Developer");

    let outcome = client
        .execute(&format!("{base}/api/users"), HttpMethod::Post)
        .await;

    assert!(outcome.error.is_none());
    assert_eq!(outcome.response.unwrap().http_status_code, 201);

    let created: serde_json::Value =
        serde_json::from_slice(outcome.data.as_deref().unwrap()).unwrap();
    assert_eq!(created["name"], "Frank Bara");
    assert_eq!(created["job"], "Developer");
    assert!(created["id"].is_string());
}

#[tokio::test]
async fn form_encoded_body_crosses_the_wire() {
    let base = start_server().await;
    let mut client = RestClient::new();
    client
        .request_headers
        .add("Content-Type", "application/x-www-form-urlencoded");
    client.body_parameters.add("name", "Frank Bara");

    let outcome = client
        .execute(&format!("{base}/api/echo"), HttpMethod::Post)
        .await;

    assert!(outcome.error.is_none());
    let echo: serde_json::Value =
        serde_json::from_slice(outcome.data.as_deref().unwrap()).unwrap();
    assert_eq!(
        echo["content_type"],
        "application/x-www-form-urlencoded"
    );
    assert_eq!(echo["body"], "name=Frank%20Bara");
}

#[tokio::test]
async fn missing_content_type_sends_empty_body() {
    let base = start_server().await;
    let mut client = RestClient::new();
    // Body parameters without a Content-Type header produce no body, so the
    // JSON endpoint rejects the request with 415.
    client.body_parameters.add("name", "Frank Bara");

    let outcome = client
        .execute(&format!("{base}/api/users"), HttpMethod::Post)
        .await;

    assert!(outcome.error.is_none());
    assert_eq!(outcome.response.unwrap().http_status_code, 415);
}

#[tokio::test]
async fn unknown_user_surfaces_status_not_error() {
    let base = start_server().await;
    let client = RestClient::new();

    let outcome = client
        .execute(&format!("{base}/api/users/100"), HttpMethod::Get)
        .await;

    assert!(outcome.error.is_none());
    assert_eq!(outcome.response.unwrap().http_status_code, 404);
}

#[tokio::test]
async fn connection_failure_is_forwarded_as_transport_error() {
    // Bind then immediately drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RestClient::new();
    let outcome = client
        .execute(&format!("http://{addr}/api/users"), HttpMethod::Get)
        .await;

    let err = outcome.error.expect("expected a transport error");
    assert!(!err.is_request_creation_failed());
    assert!(outcome.response.is_none());
    assert!(outcome.data.is_none());
}

#[tokio::test]
async fn execute_with_delivers_once_over_real_http() {
    let base = start_server().await;
    let mut client = RestClient::new();
    client.query_parameters.add("page", "1");

    let (tx, rx) = std::sync::mpsc::channel::<Outcome>();
    let handle = client.execute_with(&format!("{base}/api/users"), HttpMethod::Get, move |o| {
        tx.send(o).unwrap();
    });

    handle.await.unwrap();
    let outcome = rx.recv().unwrap();
    assert_eq!(outcome.response.unwrap().http_status_code, 200);
    assert!(rx.try_recv().is_err(), "callback fired more than once");
}

#[tokio::test]
async fn client_is_reusable_across_executions() {
    let base = start_server().await;
    let mut client = RestClient::new();
    client.query_parameters.add("page", "2");

    let first = client
        .execute(&format!("{base}/api/users"), HttpMethod::Get)
        .await;
    let second = client
        .execute(&format!("{base}/api/users"), HttpMethod::Get)
        .await;

    for outcome in [first, second] {
        let page: serde_json::Value =
            serde_json::from_slice(outcome.data.as_deref().unwrap()).unwrap();
        assert_eq!(page["page"], 2);
    }
}
