use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use dijkstra_graph::web::{build_app, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

// Send one request through the router and decode the JSON body
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_reference_graph(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/graphs",
        Some(json!({ "A": { "B": 1, "C": 4 }, "B": { "C": 1 }, "C": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["node_count"], json!(3));
    assert_eq!(body["edge_count"], json!(3));
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_graph_and_query_path() {
    let app = build_app(&ServerConfig::default());
    let id = create_reference_graph(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/graphs/{}/path", id),
        Some(json!({ "start": "A", "goal": "C", "options": { "cost": true } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "path": ["A", "B", "C"], "cost": 2.0 }));

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/graphs/{}/path", id),
        Some(json!({ "start": "A", "goal": "C", "options": { "reverse": true, "trim": true } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["B"]));

    // no options at all, and an unreachable goal
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/graphs/{}/path", id),
        Some(json!({ "start": "C", "goal": "A" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_add_node_updates_graph() {
    let app = build_app(&ServerConfig::default());
    let id = create_reference_graph(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/graphs/{}/nodes", id),
        Some(json!({ "name": "C", "neighbors": { "links": { "D": 0.5 } } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["edge_count"], json!(4));

    let (_, body) = send(
        &app,
        "POST",
        &format!("/api/graphs/{}/path", id),
        Some(json!({ "start": "A", "goal": "D", "options": { "cost": true } })),
    )
    .await;
    assert_eq!(body, json!({ "path": ["A", "B", "C", "D"], "cost": 2.5 }));
}

#[tokio::test]
async fn test_invalid_cost_is_rejected_without_changes() {
    let app = build_app(&ServerConfig::default());
    let id = create_reference_graph(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/graphs/{}/nodes", id),
        Some(json!({ "name": "A", "neighbors": { "B": -1 } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid_cost"));

    let (status, body) = send(&app, "GET", &format!("/api/graphs/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["adjacency"]["A"], json!({ "B": 1.0, "C": 4.0 }));
}

#[tokio::test]
async fn test_invalid_inputs() {
    let app = build_app(&ServerConfig::default());

    let (status, body) = send(&app, "POST", "/api/graphs", Some(json!([1, 2, 3]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid_argument_type"));

    let id = create_reference_graph(&app).await;
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/graphs/{}/path", id),
        Some(json!({ "start": "A", "goal": "C", "options": "cost" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid_options"));
}

#[tokio::test]
async fn test_unknown_and_deleted_sessions() {
    let app = build_app(&ServerConfig::default());
    let missing = uuid::Uuid::new_v4();

    let (status, body) = send(&app, "GET", &format!("/api/graphs/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("session_not_found"));

    let id = create_reference_graph(&app).await;
    let (status, _) = send(&app, "DELETE", &format!("/api/graphs/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/graphs/{}/path", id),
        Some(json!({ "start": "A", "goal": "C" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_sessions_listing_and_limit() {
    let config = ServerConfig {
        max_sessions: 2,
        ..ServerConfig::default()
    };
    let app = build_app(&config);

    let (_, health) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(health, json!({ "status": "ok", "sessions": 0 }));

    create_reference_graph(&app).await;
    let (status, _) = send(&app, "POST", "/api/graphs", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", "/api/graphs", Some(json!({}))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], json!("session_limit_reached"));

    let (status, body) = send(&app, "GET", "/api/sessions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}
