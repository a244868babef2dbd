//! In-process slicing service for integration tests.
//!
//! Serves the three slice-by endpoints on an ephemeral port so tests go
//! through the real reqwest backend.

use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde_json::{Value, json};

/// Token the `guarded` slice-by requires.
pub const TEST_TOKEN: &str = "test-token";

/// Start the fake service and return its base URL.
pub async fn spawn_service() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new()
        .route("/sliceby/:id/info/", post(info))
        .route("/sliceby/:id/rows/", post(rows))
        .route("/sliceby/:id/aggregate/", post(aggregate));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn info(Path(id): Path<String>, headers: HeaderMap) -> Response {
    match id.as_str() {
        "letters" => Json(json!({
            "id": "letters",
            "type": "GroupBy",
            "n_slices": 3,
            "slice_keys": ["a", "b", "c"]
        }))
        .into_response(),
        "mixed" => Json(json!({
            "id": "mixed",
            "type": "SliceBy",
            "n_slices": 3,
            "slice_keys": [42, "foo", "42"]
        }))
        .into_response(),
        "partial" => Json(json!({
            "id": "partial",
            "type": "GroupBy",
            "slice_keys": ["a"]
        }))
        .into_response(),
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "kaboom").into_response(),
        "html" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            StatusCode::NO_CONTENT.into_response()
        }
        "guarded" => {
            let expected = format!("Bearer {TEST_TOKEN}");
            let authorized = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v == expected);
            if authorized {
                Json(json!({"id": "guarded", "type": "GroupBy", "n_slices": 0, "slice_keys": []}))
                    .into_response()
            } else {
                (StatusCode::UNAUTHORIZED, "missing token").into_response()
            }
        }
        other if other.starts_with("echo:") => Json(json!({
            "id": other,
            "type": "GroupBy",
            "n_slices": 1,
            "slice_keys": [other]
        }))
        .into_response(),
        _ => (StatusCode::NOT_FOUND, "no such sliceby").into_response(),
    }
}

/// Echoes the requested key and window back as a one-row panel.
async fn rows(Path(id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "column_infos": [
            {"name": "sliceby", "type": "ScalarColumn", "cell_component": "basic"},
            {"name": "slice_key", "type": "ScalarColumn", "cell_component": "basic"},
            {"name": "start", "type": "ScalarColumn", "cell_component": "basic"},
            {"name": "end", "type": "ScalarColumn", "cell_component": "basic"}
        ],
        "rows": [[id, body["slice_key"], body["start"], body["end"]]],
        "full_length": 1,
        "primary_key": "sliceby"
    }))
}

/// Echoes the aggregation request back.
async fn aggregate(Path(_id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    Json(json!({ "request": body }))
}
