//! HTTP + WebSocket API for the scan pipeline
//!
//! Endpoints:
//! - POST /scan/new - Create new scan session
//! - GET /scan/{id} - Get scan status
//! - POST /scan/{id}/face - Submit one face as a pixel grid
//! - POST /scan/{id}/solve - Validate, solve and translate
//! - POST /scan/{id}/reset - Reset the session
//! - WS /ws/{id} - Live progress updates
//! - GET /health - Health check

use axum::{
    extract::{
        ws::{Message, WebSocket},
        Path, State, WebSocketUpgrade,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::core::{validate, ColorClassifier, FrameSampler, GridBuffer, ScanSession, SolverBackend};
use crate::core::translator::translate_sequence;
use crate::types::{Facelet, ReferenceTable, Rgb, ScanPhase, ScanReason};

/// One scan session held by the server
#[derive(Debug)]
pub struct Scan {
    pub id: String,
    pub sampler: FrameSampler,
    pub session: ScanSession,
    pub update_tx: broadcast::Sender<ScanUpdate>,
}

/// Live update message
#[derive(Debug, Clone, Serialize)]
pub struct ScanUpdate {
    pub phase: String,
    pub captured: usize,
    pub cursor: Option<usize>,
    pub cube_available: bool,
}

/// App state
pub struct AppState {
    pub scans: RwLock<HashMap<String, Scan>>,
    pub solver: SolverBackend,
}

/// One reference table entry in a create request
#[derive(Debug, Deserialize)]
pub struct TableEntryBody {
    pub label: Facelet,
    pub color: [u8; 3],
}

/// Create new scan request; omitting the table uses the reference mapping
#[derive(Debug, Default, Deserialize)]
pub struct NewScanRequest {
    pub table: Option<Vec<TableEntryBody>>,
}

/// Create new scan response
#[derive(Debug, Serialize)]
pub struct NewScanResponse {
    pub scan_id: String,
    pub websocket_url: String,
}

/// Scan status response
#[derive(Debug, Serialize)]
pub struct ScanStatusResponse {
    pub scan_id: String,
    pub phase: String,
    pub captured: usize,
    pub cursor: Option<usize>,
    pub faces: Vec<String>,
    pub cube_available: bool,
}

/// Submit face request: row-major pixel grid for one face
#[derive(Debug, Deserialize)]
pub struct SubmitFaceRequest {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

/// Submit face response
#[derive(Debug, Serialize)]
pub struct SubmitFaceResponse {
    pub face_index: usize,
    pub face: String,
    pub phase: String,
    pub reason: String,
}

/// Solve response
#[derive(Debug, Serialize)]
pub struct SolveCubeResponse {
    pub cube: String,
    pub moves: Vec<String>,
    pub steps: Vec<String>,
}

/// Reset response
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub scan_id: String,
    pub phase: String,
    pub reason: String,
}

/// Tagged error body, reason codes from the pipeline taxonomy
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub reason: String,
    pub message: String,
}

impl ErrorResponse {
    fn new(reason: ScanReason, message: impl Into<String>) -> Self {
        Self {
            reason: reason.code().to_string(),
            message: message.into(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub scans_active: usize,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Create the API router
pub fn create_router(solver: SolverBackend) -> Router {
    let state = Arc::new(AppState {
        scans: RwLock::new(HashMap::new()),
        solver,
    });

    Router::new()
        .route("/health", get(health))
        .route("/scan/new", post(create_scan))
        .route("/scan/:id", get(get_scan))
        .route("/scan/:id/face", post(submit_face))
        .route("/scan/:id/solve", post(solve_cube))
        .route("/scan/:id/reset", post(reset_scan))
        .route("/ws/:id", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let scans = state.scans.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        scans_active: scans.len(),
    })
}

/// Create new scan session
async fn create_scan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewScanRequest>,
) -> Result<Json<NewScanResponse>, ApiError> {
    let table = match req.table {
        None => ReferenceTable::reference(),
        Some(entries) => {
            let entries = entries
                .into_iter()
                .map(|e| (e.label, Rgb::new(e.color[0], e.color[1], e.color[2])))
                .collect();
            ReferenceTable::new(entries).map_err(|e| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        reason: "BAD_REFERENCE_TABLE".to_string(),
                        message: e.to_string(),
                    }),
                )
            })?
        }
    };

    let scan_id = generate_scan_id();
    let (tx, _) = broadcast::channel(100);

    let scan = Scan {
        id: scan_id.clone(),
        sampler: FrameSampler::new(ColorClassifier::new(table)),
        session: ScanSession::new(),
        update_tx: tx,
    };

    let mut scans = state.scans.write().await;
    scans.insert(scan_id.clone(), scan);

    Ok(Json(NewScanResponse {
        scan_id: scan_id.clone(),
        websocket_url: format!("/ws/{}", scan_id),
    }))
}

/// Get scan status
async fn get_scan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ScanStatusResponse>, StatusCode> {
    let scans = state.scans.read().await;
    let scan = scans.get(&id).ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(scan_status(scan)))
}

fn scan_status(scan: &Scan) -> ScanStatusResponse {
    ScanStatusResponse {
        scan_id: scan.id.clone(),
        phase: scan.session.phase().to_string(),
        captured: scan.session.captured(),
        cursor: scan.session.cursor(),
        faces: scan.session.faces().iter().map(|f| f.to_string()).collect(),
        cube_available: scan.session.is_complete(),
    }
}

/// Submit one face image to a scan session
async fn submit_face(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<SubmitFaceRequest>,
) -> Result<Json<SubmitFaceResponse>, ApiError> {
    let mut scans = state.scans.write().await;
    let scan = scans.get_mut(&id).ok_or_else(not_found)?;

    let pixels: Vec<Rgb> = req
        .pixels
        .iter()
        .map(|p| Rgb::new(p[0], p[1], p[2]))
        .collect();
    let buffer = GridBuffer::new(req.width, req.height, pixels).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                ScanReason::A001_ZERO_AREA_BUFFER,
                "pixel count does not match width x height",
            )),
        )
    })?;

    // Acquisition error: no face recorded, cursor unchanged
    let face = scan.sampler.sample_face(&buffer).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.reason(), e.to_string())),
        )
    })?;

    let progress = scan.session.submit_face(face).map_err(|e| {
        (
            StatusCode::CONFLICT,
            Json(ErrorResponse::new(e.reason(), e.to_string())),
        )
    })?;

    // Broadcast progress to live observers
    let update = ScanUpdate {
        phase: progress.phase.to_string(),
        captured: scan.session.captured(),
        cursor: scan.session.cursor(),
        cube_available: scan.session.is_complete(),
    };
    let _ = scan.update_tx.send(update);

    Ok(Json(SubmitFaceResponse {
        face_index: progress.face_index,
        face: progress.face.to_string(),
        phase: progress.phase.to_string(),
        reason: progress.reason.code().to_string(),
    }))
}

/// Validate the assembled cube, call the solving service, translate the moves
async fn solve_cube(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SolveCubeResponse>, ApiError> {
    // Read the cube string under the lock, solve outside it
    let cube_string = {
        let scans = state.scans.read().await;
        let scan = scans.get(&id).ok_or_else(not_found)?;
        scan.session.cube_string().map_err(|e| {
            (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new(e.reason(), e.to_string())),
            )
        })?
    };

    // Structural gate before any network round-trip; the session stays READY
    // on failure so the caller may reset and rescan
    let cube = validate(&cube_string).map_err(|e| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(e.reason(), e.to_string())),
        )
    })?;

    let moves = state.solver.solve(&cube).await.map_err(|e| {
        let status = match e.reason() {
            ScanReason::X001_SOLVER_REJECTED => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::BAD_GATEWAY,
        };
        (status, Json(ErrorResponse::new(e.reason(), e.to_string())))
    })?;

    let steps = translate_sequence(&moves);

    Ok(Json(SolveCubeResponse {
        cube: cube.as_string(),
        moves,
        steps,
    }))
}

/// Reset a scan session to EMPTY
async fn reset_scan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ResetResponse>, ApiError> {
    let mut scans = state.scans.write().await;
    let scan = scans.get_mut(&id).ok_or_else(not_found)?;

    scan.session.reset();

    let update = ScanUpdate {
        phase: ScanPhase::Empty.to_string(),
        captured: 0,
        cursor: Some(1),
        cube_available: false,
    };
    let _ = scan.update_tx.send(update);

    Ok(Json(ResetResponse {
        scan_id: id,
        phase: ScanPhase::Empty.to_string(),
        reason: ScanReason::S005_SESSION_RESET.code().to_string(),
    }))
}

fn not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            reason: "NOT_FOUND".to_string(),
            message: "no such scan".to_string(),
        }),
    )
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, StatusCode> {
    let scans = state.scans.read().await;
    let scan = scans.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    let rx = scan.update_tx.subscribe();
    drop(scans);

    Ok(ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, rx).await;
    }))
}

/// Handle WebSocket connection: push updates, ignore inbound traffic
async fn handle_websocket(socket: WebSocket, mut rx: broadcast::Receiver<ScanUpdate>) {
    let (mut sender, _receiver) = socket.split();
    while let Ok(update) = rx.recv().await {
        let json = serde_json::to_string(&update).unwrap_or_default();
        if sender.send(Message::Text(json)).await.is_err() {
            break;
        }
    }
}

/// Generate scan ID
fn generate_scan_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("scan_{:x}", nanos as u64)
}

/// Run the API server
pub async fn run_server(addr: &str, solver: SolverBackend) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(solver);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("cubescan API running on {}", addr);
    println!("  POST /scan/new        - Create scan session");
    println!("  GET  /scan/:id        - Get status");
    println!("  POST /scan/:id/face   - Submit face pixel grid");
    println!("  POST /scan/:id/solve  - Validate, solve, translate");
    println!("  POST /scan/:id/reset  - Reset session");
    println!("  WS   /ws/:id          - Live updates");
    println!("  GET  /health          - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
