//! Status poller tests against an in-process stub of the status endpoint.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use rideshare_client::{poll, ApiClient, ClientError, PollOutcome, StatusPoller};
use serde_json::{json, Value};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Serves /api/ride-requests/status, answering from a fixed script of
/// (status code, body) pairs; the last entry repeats forever.
async fn spawn_status_stub(script: Vec<(StatusCode, Value)>) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = (Arc::new(script), hits.clone());

    async fn respond(
        State((script, hits)): State<(Arc<Vec<(StatusCode, Value)>>, Arc<AtomicUsize>)>,
    ) -> (StatusCode, Json<Value>) {
        let n = hits.fetch_add(1, Ordering::SeqCst);
        let (status, body) = &script[n.min(script.len() - 1)];
        (*status, Json(body.clone()))
    }

    let app = Router::new()
        .route("/api/ride-requests/status", get(respond))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), hits)
}

fn fast_poller(base_url: String) -> StatusPoller {
    StatusPoller::new(ApiClient::new(base_url), 1)
        .with_interval(Duration::from_millis(20))
        .with_max_backoff(Duration::from_millis(80))
}

#[tokio::test]
async fn poll_finishes_when_driver_accepts() {
    let (base, hits) = spawn_status_stub(vec![
        (StatusCode::OK, json!({"status": "Pending"})),
        (StatusCode::OK, json!({"status": "Pending"})),
        (StatusCode::OK, json!({"status": "Accepted"})),
    ])
    .await;

    let (_cancel_tx, cancel_rx) = poll::cancel_channel();
    let outcome = fast_poller(base).run(cancel_rx).await.unwrap();

    assert_eq!(outcome, PollOutcome::Accepted);
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn poll_stops_on_unknown_request() {
    let (base, hits) = spawn_status_stub(vec![(
        StatusCode::NOT_FOUND,
        json!({"error": "Ride request not found"}),
    )])
    .await;

    let (_cancel_tx, cancel_rx) = poll::cancel_channel();
    let err = fast_poller(base).run(cancel_rx).await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound(_)));
    // A permanent error must not be retried.
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn poll_retries_through_transient_server_errors() {
    let (base, hits) = spawn_status_stub(vec![
        (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"})),
        (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": "boom"})),
        (StatusCode::OK, json!({"status": "Accepted"})),
    ])
    .await;

    let (_cancel_tx, cancel_rx) = poll::cancel_channel();
    let outcome = fast_poller(base).run(cancel_rx).await.unwrap();

    assert_eq!(outcome, PollOutcome::Accepted);
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn poll_can_be_cancelled() {
    let (base, _hits) =
        spawn_status_stub(vec![(StatusCode::OK, json!({"status": "Pending"}))]).await;

    let (cancel_tx, cancel_rx) = poll::cancel_channel();
    let poller = fast_poller(base);
    let handle = tokio::spawn(async move { poller.run(cancel_rx).await });

    tokio::time::sleep(Duration::from_millis(50)).await;
    cancel_tx.send(true).unwrap();

    let outcome = handle.await.unwrap().unwrap();
    assert_eq!(outcome, PollOutcome::Cancelled);
}

#[tokio::test]
async fn poll_stops_when_cancel_handle_is_dropped() {
    let (base, _hits) =
        spawn_status_stub(vec![(StatusCode::OK, json!({"status": "Pending"}))]).await;

    let (cancel_tx, cancel_rx) = poll::cancel_channel();
    let poller = fast_poller(base);
    let handle = tokio::spawn(async move { poller.run(cancel_rx).await });

    tokio::time::sleep(Duration::from_millis(50)).await;
    drop(cancel_tx);

    let outcome = handle.await.unwrap().unwrap();
    assert_eq!(outcome, PollOutcome::Cancelled);
}
