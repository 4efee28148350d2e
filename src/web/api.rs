use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{debug, info};
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dial::Dial;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::Weight;
use crate::web::models::*;
use crate::Error;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state.
///
/// The mutex serialises graph mutation and solver runs, which share the
/// per-vertex state of each session graph.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_sessions(1000)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/sessions", get(list_sessions).post(create_session))
        .route("/api/sessions/:session_id", get(get_session).delete(delete_session))
        .route("/api/sessions/:session_id/graph", get(get_graph))
        .route("/api/sessions/:session_id/vertices", post(add_vertex))
        .route("/api/sessions/:session_id/edges", post(add_edge))
        .route("/api/sessions/:session_id/run", post(run_algorithm))
        .route("/api/sessions/:session_id/compare", post(compare_algorithms))
        .route("/api/sessions/:session_id/reset", post(reset_graph))
        .route("/api/health", get(health_check))
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
        }),
    )
}

/// Maps a core error onto an HTTP status and error code
pub fn error_response(err: &Error) -> ApiError {
    let (status, code) = match err {
        Error::DuplicateVertex(_) => (StatusCode::CONFLICT, "duplicate_vertex"),
        Error::UnknownVertex(_) => (StatusCode::NOT_FOUND, "unknown_vertex"),
        Error::UnknownSource(_) => (StatusCode::NOT_FOUND, "unknown_source"),
        Error::InvalidWeight(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_weight"),
        Error::BucketRangeExceeded { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "bucket_range_exceeded"),
        Error::BucketRangeOverflow { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "bucket_range_overflow"),
        Error::CostOverflow { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "cost_overflow"),
    };
    api_error(status, code, err.to_string())
}

fn session_not_found(session_id: Uuid) -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "session_not_found",
        format!("Session {} not found", session_id),
    )
}

fn lock_sessions(state: &AppState) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
    state.sessions.lock().map_err(|_| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "state_poisoned",
            "Session store is unavailable".to_string(),
        )
    })
}

/// Create a new empty session
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionInfo>), ApiError> {
    let mut sessions = lock_sessions(&state)?;
    if sessions.len() >= state.max_sessions {
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "too_many_sessions",
            format!("Session limit of {} reached", state.max_sessions),
        ));
    }

    let session = Session::new();
    let info = session.info();
    info!("Created session {}", session.id);
    sessions.insert(session.id, session);
    Ok((StatusCode::CREATED, Json(info)))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let sessions = lock_sessions(&state)?;
    Ok(Json(sessions.keys().cloned().collect()))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionInfo>, ApiError> {
    let sessions = lock_sessions(&state)?;
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.info())),
        None => Err(session_not_found(session_id)),
    }
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut sessions = lock_sessions(&state)?;
    match sessions.remove(&session_id) {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(session_not_found(session_id)),
    }
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let sessions = lock_sessions(&state)?;
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(WebGraph::from_graph(&session.graph))),
        None => Err(session_not_found(session_id)),
    }
}

pub async fn add_vertex(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddVertexRequest>,
) -> Result<(StatusCode, Json<WebVertex>), ApiError> {
    let mut sessions = lock_sessions(&state)?;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;

    let id = session
        .graph
        .add_vertex(request.label.clone())
        .map_err(|e| error_response(&e))?;
    debug!("Session {}: added vertex {:?}", session_id, request.label);

    Ok((
        StatusCode::CREATED,
        Json(WebVertex {
            index: id.index(),
            label: request.label,
        }),
    ))
}

pub async fn add_edge(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddEdgeRequest>,
) -> Result<(StatusCode, Json<WebEdge>), ApiError> {
    let mut sessions = lock_sessions(&state)?;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;

    session
        .graph
        .add_edge(&request.from, &request.to, OrderedFloat(request.weight))
        .map_err(|e| error_response(&e))?;
    debug!(
        "Session {}: added edge {:?} -> {:?} ({})",
        session_id, request.from, request.to, request.weight
    );

    Ok((
        StatusCode::CREATED,
        Json(WebEdge {
            from: request.from,
            to: request.to,
            weight: request.weight,
        }),
    ))
}

/// Runs one solver on a session graph
fn execute(graph: &mut SessionGraph, request: &AlgorithmRequest) -> Result<AlgorithmResponse, ApiError> {
    let start_time = Instant::now();
    let result = match request.algorithm {
        AlgorithmKind::Dijkstra => Dijkstra::new()
            .with_extraction(request.extraction)
            .run(graph, &request.source),
        AlgorithmKind::Dial => {
            let max_edge_weight = request.max_edge_weight.ok_or_else(|| {
                api_error(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "missing_max_edge_weight",
                    "Dial's algorithm needs max_edge_weight".to_string(),
                )
            })?;
            Dial::new(max_edge_weight)
                .with_bucket_order(request.bucket_order)
                .run(graph, &request.source)
        }
    }
    .map_err(|e| error_response(&e))?;

    let execution_time_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    Ok(AlgorithmResponse::new(&result, execution_time_ms))
}

/// Run an algorithm on a graph
pub async fn run_algorithm(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AlgorithmRequest>,
) -> Result<Json<AlgorithmResponse>, ApiError> {
    let mut sessions = lock_sessions(&state)?;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;

    let response = execute(&mut session.graph, &request)?;
    info!(
        "Session {}: {} from {:?} reached {} vertices in {:.3} ms",
        session_id, response.algorithm, response.source, response.reachable, response.execution_time_ms
    );
    session.last_result = Some(response.clone());
    Ok(Json(response))
}

/// Run both solvers from the same source and report whether they agree
pub async fn compare_algorithms(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let mut sessions = lock_sessions(&state)?;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;

    let max_edge_weight = request.max_edge_weight.unwrap_or_else(|| {
        session
            .graph
            .max_edge_weight()
            .and_then(|w| w.as_integral())
            .unwrap_or(0)
    });

    let dijkstra = execute(
        &mut session.graph,
        &AlgorithmRequest {
            algorithm: AlgorithmKind::Dijkstra,
            source: request.source.clone(),
            max_edge_weight: None,
            extraction: Default::default(),
            bucket_order: Default::default(),
        },
    )?;
    let dial = execute(
        &mut session.graph,
        &AlgorithmRequest {
            algorithm: AlgorithmKind::Dial,
            source: request.source,
            max_edge_weight: Some(max_edge_weight),
            extraction: Default::default(),
            bucket_order: Default::default(),
        },
    )?;

    let costs_match = dijkstra
        .results
        .iter()
        .zip(&dial.results)
        .all(|(a, b)| a.cost == b.cost);
    let predecessors_match = dijkstra
        .results
        .iter()
        .zip(&dial.results)
        .all(|(a, b)| a.predecessor == b.predecessor);

    session.last_result = Some(dial.clone());
    Ok(Json(CompareResponse {
        dijkstra,
        dial,
        costs_match,
        predecessors_match,
    }))
}

/// Clear costs and predecessors left by the last run
pub async fn reset_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionInfo>, ApiError> {
    let mut sessions = lock_sessions(&state)?;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| session_not_found(session_id))?;

    session.graph.reset();
    session.last_result = None;
    Ok(Json(session.info()))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
