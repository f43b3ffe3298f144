//! Integration tests for the validate → solve → translate flow

use pretty_assertions::assert_eq;

use cubescan::core::{translate, translate_sequence, validate, FrameSampler, GridBuffer, MockSolver, ScanSession, SolverBackend};
use cubescan::types::{Facelet, ReferenceTable, ScanReason, SolveError, ValidationError};

fn scan_uniform_cube(order: [Facelet; 6]) -> String {
    let sampler = FrameSampler::default();
    let table = ReferenceTable::reference();
    let mut session = ScanSession::new();

    for label in order {
        let buffer = GridBuffer::solid(60, 60, table.color_of(label));
        let face = sampler.sample_face(&buffer).unwrap();
        session.submit_face(face).unwrap();
    }
    session.cube_string().unwrap()
}

/// Full end-to-end scenario from the scan to the instruction list
#[tokio::test]
async fn test_end_to_end_scan_solve_translate() {
    let cube_string = scan_uniform_cube([
        Facelet::U,
        Facelet::R,
        Facelet::F,
        Facelet::D,
        Facelet::L,
        Facelet::B,
    ]);

    let cube = validate(&cube_string).unwrap();
    assert_eq!(
        cube.as_string(),
        "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
    );

    let solver = SolverBackend::Mock(MockSolver::with_moves(vec!["U", "R'", "F2"]));
    let moves = solver.solve(&cube).await.unwrap();

    let steps = translate_sequence(&moves);
    assert_eq!(
        steps,
        vec![
            "Rotate Top Clockwise".to_string(),
            "Rotate Right Counter-Clockwise".to_string(),
            "Rotate Front Twice".to_string(),
        ]
    );
}

/// A malformed cube never reaches the solver
#[tokio::test]
async fn test_validation_gates_the_network_call() {
    let all_u = "U".repeat(54);
    let err = validate(&all_u).unwrap_err();

    assert_eq!(
        err,
        ValidationError::LabelCountMismatch {
            counts: [54, 0, 0, 0, 0, 0]
        }
    );
    assert_eq!(err.reason(), ScanReason::V003_LABEL_COUNT_MISMATCH);
    // No CubeState exists, so there is nothing to hand the solver
}

/// Solver rejection is a distinct outcome from validation failure
#[tokio::test]
async fn test_solver_rejection_is_not_a_validation_error() {
    let cube_string = scan_uniform_cube([
        Facelet::U,
        Facelet::R,
        Facelet::F,
        Facelet::D,
        Facelet::L,
        Facelet::B,
    ]);
    let cube = validate(&cube_string).unwrap();

    let solver = SolverBackend::Mock(MockSolver::rejecting("parity error"));
    let err = solver.solve(&cube).await.unwrap_err();

    assert_eq!(err.reason(), ScanReason::X001_SOLVER_REJECTED);
    assert!(matches!(err, SolveError::Rejected { .. }));
}

/// Translation is presentation only and survives junk tokens mid-sequence
#[test]
fn test_translation_best_effort() {
    assert_eq!(translate("R"), "Rotate Right Clockwise");
    assert_eq!(translate("R'"), "Rotate Right Counter-Clockwise");
    assert_eq!(translate("R2"), "Rotate Right Twice");
    assert_eq!(translate("X9"), "X9");

    let tokens: Vec<String> = ["D'", "wat", "B2"].iter().map(|s| s.to_string()).collect();
    let steps = translate_sequence(&tokens);
    assert_eq!(steps.len(), tokens.len());
    assert_eq!(steps[0], "Rotate Bottom Counter-Clockwise");
    assert_eq!(steps[1], "wat");
    assert_eq!(steps[2], "Rotate Back Twice");
}

/// The session stays READY after a validation failure so a rescan can start
/// from reset without silently losing everything first
#[test]
fn test_session_remains_ready_after_failed_validation() {
    let sampler = FrameSampler::default();
    let table = ReferenceTable::reference();
    let mut session = ScanSession::new();

    // Six white faces: structurally broken cube, but a complete session
    for _ in 0..6 {
        let buffer = GridBuffer::solid(30, 30, table.color_of(Facelet::U));
        let face = sampler.sample_face(&buffer).unwrap();
        session.submit_face(face).unwrap();
    }

    let cube_string = session.cube_string().unwrap();
    assert!(validate(&cube_string).is_err());

    // Still READY: the caller chooses when to reset
    assert!(session.is_complete());
    assert_eq!(session.cube_string().unwrap(), cube_string);
}
