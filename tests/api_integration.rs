//! Integration tests for the HTTP API

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use cubescan::core::{create_router, MockSolver, SolverBackend};
use cubescan::types::{Facelet, ReferenceTable};

fn create_test_router() -> axum::Router {
    create_router(SolverBackend::Mock(MockSolver::with_moves(vec![
        "U", "R'", "F2",
    ])))
}

fn face_body(label: Facelet) -> String {
    let color = ReferenceTable::reference().color_of(label);
    let pixel = json!([color.r, color.g, color.b]);
    json!({
        "width": 3,
        "height": 3,
        "pixels": vec![pixel; 9],
    })
    .to_string()
}

async fn post_json(app: &axum::Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn new_scan(app: &axum::Router) -> String {
    let (status, json) = post_json(app, "/scan/new", "{}".to_string()).await;
    assert_eq!(status, StatusCode::OK);
    json["scan_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["scans_active"], 0);
}

#[tokio::test]
async fn test_create_scan() {
    let app = create_test_router();

    let (status, json) = post_json(&app, "/scan/new", "{}".to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["scan_id"].is_string());
    assert!(json["websocket_url"].is_string());
}

#[tokio::test]
async fn test_scan_not_found() {
    let app = create_test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/scan/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_scan_and_solve_flow() {
    let app = create_test_router();
    let scan_id = new_scan(&app).await;

    let order = [
        Facelet::U,
        Facelet::R,
        Facelet::F,
        Facelet::D,
        Facelet::L,
        Facelet::B,
    ];
    for (i, label) in order.iter().enumerate() {
        let (status, json) =
            post_json(&app, &format!("/scan/{}/face", scan_id), face_body(*label)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["face_index"], i + 1);
        assert_eq!(json["face"], label.to_string().repeat(9));
    }

    // Status shows READY with the cube available
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/scan/{}", scan_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let status_json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(status_json["phase"], "READY");
    assert_eq!(status_json["captured"], 6);
    assert_eq!(status_json["cube_available"], true);

    // Solve: mock solver answers U R' F2
    let (status, json) =
        post_json(&app, &format!("/scan/{}/solve", scan_id), String::new()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["cube"],
        "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
    );
    assert_eq!(json["moves"], json!(["U", "R'", "F2"]));
    assert_eq!(
        json["steps"],
        json!([
            "Rotate Top Clockwise",
            "Rotate Right Counter-Clockwise",
            "Rotate Front Twice"
        ])
    );
}

#[tokio::test]
async fn test_seventh_face_conflicts() {
    let app = create_test_router();
    let scan_id = new_scan(&app).await;

    for label in Facelet::all() {
        let (status, _) =
            post_json(&app, &format!("/scan/{}/face", scan_id), face_body(label)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) =
        post_json(&app, &format!("/scan/{}/face", scan_id), face_body(Facelet::U)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["reason"], "S003_SESSION_ALREADY_COMPLETE");
}

#[tokio::test]
async fn test_solve_before_ready_conflicts() {
    let app = create_test_router();
    let scan_id = new_scan(&app).await;

    let (status, json) =
        post_json(&app, &format!("/scan/{}/solve", scan_id), String::new()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["reason"], "S004_CUBE_NOT_READY");
}

#[tokio::test]
async fn test_unbalanced_cube_fails_validation_not_solver() {
    let app = create_test_router();
    let scan_id = new_scan(&app).await;

    // Six white faces: 54 U's
    for _ in 0..6 {
        let (status, _) =
            post_json(&app, &format!("/scan/{}/face", scan_id), face_body(Facelet::U)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) =
        post_json(&app, &format!("/scan/{}/solve", scan_id), String::new()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["reason"], "V003_LABEL_COUNT_MISMATCH");
}

#[tokio::test]
async fn test_zero_area_face_rejected() {
    let app = create_test_router();
    let scan_id = new_scan(&app).await;

    let body = json!({ "width": 0, "height": 0, "pixels": [] }).to_string();
    let (status, json) = post_json(&app, &format!("/scan/{}/face", scan_id), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["reason"], "A001_ZERO_AREA_BUFFER");

    // Nothing was recorded
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/scan/{}", scan_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let status_json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(status_json["captured"], 0);
}

#[tokio::test]
async fn test_reset_returns_to_empty() {
    let app = create_test_router();
    let scan_id = new_scan(&app).await;

    for label in Facelet::all() {
        post_json(&app, &format!("/scan/{}/face", scan_id), face_body(label)).await;
    }

    let (status, json) =
        post_json(&app, &format!("/scan/{}/reset", scan_id), String::new()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["phase"], "EMPTY");
    assert_eq!(json["reason"], "S005_SESSION_RESET");
}

#[tokio::test]
async fn test_custom_reference_table() {
    let app = create_test_router();

    // Swap the white and yellow anchors; a white grid now reads as D
    let body = json!({
        "table": [
            { "label": "U", "color": [255, 255, 0] },
            { "label": "D", "color": [255, 255, 255] },
            { "label": "F", "color": [0, 155, 72] },
            { "label": "B", "color": [0, 70, 173] },
            { "label": "L", "color": [255, 88, 0] },
            { "label": "R", "color": [183, 18, 52] },
        ]
    })
    .to_string();
    let (status, json) = post_json(&app, "/scan/new", body).await;
    assert_eq!(status, StatusCode::OK);
    let scan_id = json["scan_id"].as_str().unwrap().to_string();

    let (status, json) =
        post_json(&app, &format!("/scan/{}/face", scan_id), face_body(Facelet::U)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["face"], "DDDDDDDDD");
}

#[tokio::test]
async fn test_solver_rejection_surfaces_distinctly() {
    let app = create_router(SolverBackend::Mock(MockSolver::rejecting("unreachable")));
    let scan_id = new_scan(&app).await;

    for label in Facelet::all() {
        post_json(&app, &format!("/scan/{}/face", scan_id), face_body(label)).await;
    }

    let (status, json) =
        post_json(&app, &format!("/scan/{}/solve", scan_id), String::new()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["reason"], "X001_SOLVER_REJECTED");
}
