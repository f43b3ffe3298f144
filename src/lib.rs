//! cubescan: camera-to-solution pipeline for a 3x3x3 twisty puzzle
//!
//! Pipeline: FrameSampler (per face) → ScanSession (collects 6 faces) →
//! CubeValidator (gate before the network call) → external solving service →
//! MoveTranslator (post-processes the response)

pub mod core;
pub mod types;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Grid dimension of one cube face (3x3)
pub const GRID_DIM: u32 = 3;

/// Facelets per face (GRID_DIM squared)
pub const FACELETS_PER_FACE: usize = 9;

/// Faces on a cube
pub const FACE_COUNT: usize = 6;

/// Facelets on a full cube (6 faces x 9 facelets)
pub const CUBE_FACELETS: usize = 54;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
