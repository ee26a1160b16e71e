use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::algorithm::path_finder::PathFinder;
use crate::algorithm::{PathOptions, PathOutput};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Arc<Session>>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }

    fn session(&self, id: Uuid) -> Result<Arc<Session>, ApiError> {
        let sessions = self.sessions.lock().map_err(|_| poisoned())?;
        sessions.get(&id).cloned().ok_or_else(|| {
            error_response(
                StatusCode::NOT_FOUND,
                "session_not_found",
                format!("Session {} not found", id),
            )
        })
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/:session_id", get(get_graph).delete(delete_graph))
        .route("/api/graphs/:session_id/nodes", post(add_node))
        .route("/api/graphs/:session_id/path", post(find_path))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

fn error_response(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn poisoned() -> ApiError {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "lock_poisoned",
        "A previous request panicked while holding shared state".to_string(),
    )
}

/// Validation failures are the caller's fault
fn invalid_input(err: Error) -> ApiError {
    let code = match err {
        Error::InvalidArgumentType { .. } => "invalid_argument_type",
        Error::InvalidCost { .. } => "invalid_cost",
        Error::InvalidOptions(_) => "invalid_options",
        Error::InvalidPriority(_) | Error::EmptyFrontier => {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "search_failed",
                err.to_string(),
            )
        }
    };
    error_response(StatusCode::BAD_REQUEST, code, err.to_string())
}

/// Create a new graph from nested construction data
pub async fn create_graph(
    State(state): State<AppState>,
    Json(data): Json<Value>,
) -> ApiResult<SessionSummary> {
    let graph = PathFinder::from_value(&data).map_err(invalid_input)?;

    let session = Arc::new(Session::new(graph));
    let summary = {
        let graph = session.graph.read().map_err(|_| poisoned())?;
        session.summarize(&graph)
    };

    {
        let mut sessions = state.sessions.lock().map_err(|_| poisoned())?;
        if sessions.len() >= state.max_sessions {
            warn!("Session limit of {} reached", state.max_sessions);
            return Err(error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "session_limit_reached",
                format!("At most {} graphs can be stored", state.max_sessions),
            ));
        }
        sessions.insert(session.id, session.clone());
    }

    info!(
        "Created graph {} ({} nodes, {} edges)",
        summary.id, summary.node_count, summary.edge_count
    );
    Ok(Json(summary))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<GraphView> {
    let session = state.session(session_id)?;
    let graph = session.graph.read().map_err(|_| poisoned())?;
    Ok(Json(session.view(&graph)))
}

/// Drop a session and its graph
pub async fn delete_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut sessions = state.sessions.lock().map_err(|_| poisoned())?;
    match sessions.remove(&session_id) {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(error_response(
            StatusCode::NOT_FOUND,
            "session_not_found",
            format!("Session {} not found", session_id),
        )),
    }
}

/// Register or replace a node's outgoing edges
pub async fn add_node(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddNodeRequest>,
) -> ApiResult<SessionSummary> {
    let session = state.session(session_id)?;
    let mut graph = session.graph.write().map_err(|_| poisoned())?;
    graph
        .add_node_value(request.name, &request.neighbors)
        .map_err(invalid_input)?;
    Ok(Json(session.summarize(&graph)))
}

/// Run a shortest-path query
pub async fn find_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PathRequest>,
) -> ApiResult<PathOutput<String>> {
    let options = PathOptions::try_from(&request.options).map_err(invalid_input)?;
    let session = state.session(session_id)?;
    let graph = session.graph.read().map_err(|_| poisoned())?;
    let output = graph
        .path(&request.start, &request.goal, &options)
        .map_err(invalid_input)?;
    Ok(Json(output))
}

/// List all sessions
pub async fn list_sessions(State(state): State<AppState>) -> ApiResult<Vec<SessionSummary>> {
    let sessions: Vec<Arc<Session>> = {
        let sessions = state.sessions.lock().map_err(|_| poisoned())?;
        sessions.values().cloned().collect()
    };

    let mut summaries = Vec::with_capacity(sessions.len());
    for session in sessions {
        let graph = session.graph.read().map_err(|_| poisoned())?;
        summaries.push(session.summarize(&graph));
    }
    summaries.sort_by_key(|s| s.created_at);
    Ok(Json(summaries))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> ApiResult<HealthResponse> {
    let sessions = state.sessions.lock().map_err(|_| poisoned())?.len();
    Ok(Json(HealthResponse {
        status: "ok",
        sessions,
    }))
}
