//! End-to-end API tests.
//!
//! These run against a real MySQL database and are skipped unless
//! TEST_DATABASE_URL is set, e.g.
//!   TEST_DATABASE_URL=mysql://root@localhost/rideshare_test cargo test

use axum::{routing::post, Router};
use rideshare::{handlers, services::PushService, AppState, MySqlPool};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use once_cell::sync::Lazy;

// The tests share one database, so they must not interleave.
static DB_LOCK: Lazy<tokio::sync::Mutex<()>> = Lazy::new(|| tokio::sync::Mutex::new(()));

async fn test_pool() -> Option<MySqlPool> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = MySqlPool::connect(&url).await.expect("connect test database");
    rideshare::db::migrations::run_migrations(&pool)
        .await
        .expect("run migrations");
    for table in ["feedback", "progress", "ride_requests", "rides", "users"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&pool)
            .await
            .expect("truncate table");
    }
    Some(pool)
}

/// Stub push gateway that counts deliveries instead of calling Expo.
async fn spawn_push_stub() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/push",
        post(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                axum::Json(json!({"data": [{"status": "ok"}]}))
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}/push", addr), hits)
}

async fn spawn_server(pool: MySqlPool, push_url: String) -> SocketAddr {
    let state = AppState {
        pool,
        push: PushService::new(push_url),
    };
    let app = handlers::router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn count_rows(pool: &MySqlPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn ride_request_lifecycle() {
    let _guard = DB_LOCK.lock().await;
    let Some(pool) = test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    let (push_url, push_hits) = spawn_push_stub().await;
    let addr = spawn_server(pool.clone(), push_url).await;
    let base = format!("http://{}", addr);
    let http = reqwest::Client::new();

    // Missing contact -> 400, no insert.
    let before = count_rows(&pool, "ride_requests").await;
    let resp = http
        .post(format!("{base}/api/ride-requests"))
        .json(&json!({
            "rider_name": "Asha",
            "gender": "female",
            "pickup_location": "MG Road",
            "destination_location": "Airport",
            "push_token": "ExponentPushToken[test-token]"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(count_rows(&pool, "ride_requests").await, before);

    // Valid request -> 201 with an id.
    let resp = http
        .post(format!("{base}/api/ride-requests"))
        .json(&json!({
            "rider_name": "Asha",
            "gender": "female",
            "pickup_location": "MG Road",
            "destination_location": "Airport",
            "contact": "9876543210",
            "push_token": "ExponentPushToken[test-token]"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    let request_id = body["requestId"].as_i64().unwrap();

    // Fresh request polls as Pending.
    let resp = http
        .get(format!("{base}/api/ride-requests/status?requestId={request_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "Pending");

    // Unknown id -> 404.
    let resp = http
        .get(format!("{base}/api/ride-requests/status?requestId=999999"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // Driver accepts -> Accepted plus one progress row.
    let resp = http
        .post(format!("{base}/api/ride-requests/{request_id}/accept"))
        .json(&json!({"driver_name": "Ravi"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let progress_id = body["progressId"].as_i64().unwrap();

    let resp = http
        .get(format!("{base}/api/ride-requests/status?requestId={request_id}"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "Accepted");

    let progress: String = sqlx::query_scalar("SELECT progress FROM progress WHERE id = ?")
        .bind(progress_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(progress, "on progress");

    // Second accept is rejected and creates no second progress row.
    let resp = http
        .post(format!("{base}/api/ride-requests/{request_id}/accept"))
        .json(&json!({"driver_name": "Someone Else"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
    assert_eq!(count_rows(&pool, "progress").await, 1);

    // Wrong driver cannot complete the trip.
    let resp = http
        .put(format!("{base}/api/ride-requests/progress/Nobody/{progress_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // Rider reaches the destination.
    let resp = http
        .put(format!("{base}/api/ride-requests/progress/Ravi/{progress_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let progress: String = sqlx::query_scalar("SELECT progress FROM progress WHERE id = ?")
        .bind(progress_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(progress, "completed");

    // Completing twice finds nothing left in progress.
    let resp = http
        .put(format!("{base}/api/ride-requests/progress/Ravi/{progress_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // Exactly one push went out, for the single successful accept.
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    assert_eq!(push_hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn rides_listing_purges_expired_offers() {
    let _guard = DB_LOCK.lock().await;
    let Some(pool) = test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    let (push_url, _hits) = spawn_push_stub().await;
    let addr = spawn_server(pool.clone(), push_url).await;
    let base = format!("http://{}", addr);
    let http = reqwest::Client::new();

    let yesterday = (chrono::Utc::now() - chrono::Duration::days(1))
        .date_naive()
        .to_string();
    let tomorrow = (chrono::Utc::now() + chrono::Duration::days(1))
        .date_naive()
        .to_string();

    for (date, origin) in [(&yesterday, "Old Town"), (&tomorrow, "New Town")] {
        let resp = http
            .post(format!("{base}/api/rides"))
            .json(&json!({
                "driver_name": "Ravi",
                "vehicle_info": "White Swift KA-01",
                "origin": origin,
                "destination": "Airport",
                "available_seats": 3,
                "ride_date": date,
                "ride_time": "09:30:00"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    // The expired offer is purged as a side effect of the listing.
    let resp = http.get(format!("{base}/api/rides")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let rides: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(rides.len(), 1);
    assert_eq!(rides[0]["origin"], "New Town");
    assert_eq!(count_rows(&pool, "rides").await, 1);
}

#[tokio::test]
async fn accept_rejects_malformed_push_token_without_writes() {
    let _guard = DB_LOCK.lock().await;
    let Some(pool) = test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    let (push_url, push_hits) = spawn_push_stub().await;
    let addr = spawn_server(pool.clone(), push_url).await;
    let base = format!("http://{}", addr);
    let http = reqwest::Client::new();

    let resp = http
        .post(format!("{base}/api/ride-requests"))
        .json(&json!({
            "rider_name": "Asha",
            "gender": "female",
            "pickup_location": "MG Road",
            "destination_location": "Airport",
            "contact": "9876543210",
            "push_token": "not-a-real-token"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    let request_id = body["requestId"].as_i64().unwrap();

    let resp = http
        .post(format!("{base}/api/ride-requests/{request_id}/accept"))
        .json(&json!({"driver_name": "Ravi"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Nothing moved: still Pending, no progress row, no push.
    let status: String = sqlx::query_scalar("SELECT status FROM ride_requests WHERE id = ?")
        .bind(request_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(status, "Pending");
    assert_eq!(count_rows(&pool, "progress").await, 0);
    assert_eq!(push_hits.load(Ordering::SeqCst), 0);
}
