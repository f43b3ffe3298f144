//! Tagged outcomes and reason codes for the pipeline boundary
//!
//! Every boundary result is an explicit value the caller can inspect and
//! render; nothing in the core prints, alerts or retries on its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{FaceString, Facelet, ScanPhase};

/// Reason codes for all pipeline outcomes
///
/// Families: S (session), A (acquisition), V (validation), X (external solve)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ScanReason {
    // =========================================================================
    // S: Session progress
    // =========================================================================
    /// Face accepted, session still collecting
    S001_FACE_ACCEPTED,
    /// Face accepted and session became READY
    S002_SESSION_COMPLETE,
    /// Submit rejected, session already holds 6 faces
    S003_SESSION_ALREADY_COMPLETE,
    /// Cube string requested before 6 faces were captured
    S004_CUBE_NOT_READY,
    /// Session reset to EMPTY
    S005_SESSION_RESET,

    // =========================================================================
    // A: Acquisition
    // =========================================================================
    /// Pixel buffer has zero width or height
    A001_ZERO_AREA_BUFFER,

    // =========================================================================
    // V: Structural validation
    // =========================================================================
    /// Cube string length is not 54
    V001_WRONG_LENGTH,
    /// Cube string contains a character outside the six labels
    V002_UNKNOWN_LABEL,
    /// Some label does not occur exactly 9 times
    V003_LABEL_COUNT_MISMATCH,

    // =========================================================================
    // X: External solve
    // =========================================================================
    /// Solver rejected a structurally valid cube
    X001_SOLVER_REJECTED,
    /// Transport failure talking to the solving service
    X002_TRANSPORT_FAILED,
}

impl ScanReason {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::S001_FACE_ACCEPTED => "S001_FACE_ACCEPTED",
            Self::S002_SESSION_COMPLETE => "S002_SESSION_COMPLETE",
            Self::S003_SESSION_ALREADY_COMPLETE => "S003_SESSION_ALREADY_COMPLETE",
            Self::S004_CUBE_NOT_READY => "S004_CUBE_NOT_READY",
            Self::S005_SESSION_RESET => "S005_SESSION_RESET",
            Self::A001_ZERO_AREA_BUFFER => "A001_ZERO_AREA_BUFFER",
            Self::V001_WRONG_LENGTH => "V001_WRONG_LENGTH",
            Self::V002_UNKNOWN_LABEL => "V002_UNKNOWN_LABEL",
            Self::V003_LABEL_COUNT_MISMATCH => "V003_LABEL_COUNT_MISMATCH",
            Self::X001_SOLVER_REJECTED => "X001_SOLVER_REJECTED",
            Self::X002_TRANSPORT_FAILED => "X002_TRANSPORT_FAILED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::S001_FACE_ACCEPTED => "Face accepted",
            Self::S002_SESSION_COMPLETE => "All 6 faces captured",
            Self::S003_SESSION_ALREADY_COMPLETE => "Session already complete, reset first",
            Self::S004_CUBE_NOT_READY => "Cube string not available yet",
            Self::S005_SESSION_RESET => "Session reset",
            Self::A001_ZERO_AREA_BUFFER => "Pixel buffer has zero area",
            Self::V001_WRONG_LENGTH => "Cube string is not 54 characters",
            Self::V002_UNKNOWN_LABEL => "Unknown facelet label",
            Self::V003_LABEL_COUNT_MISMATCH => "Label counts are not 9 each",
            Self::X001_SOLVER_REJECTED => "Solver rejected the cube",
            Self::X002_TRANSPORT_FAILED => "Solving service unreachable",
        }
    }
}

impl std::fmt::Display for ScanReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// Acquisition errors: the image source handed us a degenerate buffer.
/// No face is recorded and the session cursor is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcquisitionError {
    /// Buffer with zero width or height, rejected before sampling
    ZeroArea { width: u32, height: u32 },
}

impl AcquisitionError {
    pub fn reason(&self) -> ScanReason {
        match self {
            Self::ZeroArea { .. } => ScanReason::A001_ZERO_AREA_BUFFER,
        }
    }
}

impl std::fmt::Display for AcquisitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroArea { width, height } => {
                write!(f, "pixel buffer has zero area ({}x{})", width, height)
            }
        }
    }
}

impl std::error::Error for AcquisitionError {}

/// Session-sequencing errors: precondition violations, no state mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionError {
    /// submit_face called with 6 faces already captured
    AlreadyComplete,
    /// cube_string called before 6 faces were captured
    NotReady { captured: usize },
}

impl SessionError {
    pub fn reason(&self) -> ScanReason {
        match self {
            Self::AlreadyComplete => ScanReason::S003_SESSION_ALREADY_COMPLETE,
            Self::NotReady { .. } => ScanReason::S004_CUBE_NOT_READY,
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyComplete => write!(f, "session already holds 6 faces, reset first"),
            Self::NotReady { captured } => {
                write!(f, "cube string needs 6 faces, only {} captured", captured)
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Structural validation errors
///
/// A failed cube is never sent to the solving service; the session stays
/// READY so the caller can reset and rescan instead of losing progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Length is not exactly 54
    WrongLength { actual: usize },
    /// Character outside the six labels, with its position
    UnknownLabel { position: usize, found: char },
    /// Some label count differs from 9; counts follow label declaration order
    LabelCountMismatch { counts: [usize; 6] },
}

impl ValidationError {
    pub fn reason(&self) -> ScanReason {
        match self {
            Self::WrongLength { .. } => ScanReason::V001_WRONG_LENGTH,
            Self::UnknownLabel { .. } => ScanReason::V002_UNKNOWN_LABEL,
            Self::LabelCountMismatch { .. } => ScanReason::V003_LABEL_COUNT_MISMATCH,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength { actual } => {
                write!(f, "cube string must be 54 characters, got {}", actual)
            }
            Self::UnknownLabel { position, found } => {
                write!(f, "unknown label '{}' at position {}", found, position)
            }
            Self::LabelCountMismatch { counts } => {
                write!(f, "label counts are not 9 each:")?;
                for (label, count) in Facelet::all().iter().zip(counts.iter()) {
                    write!(f, " {}={}", label, count)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Solve failures, distinct from structural validation: a bad scan wants a
/// rescan, a bad network wants a retry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveError {
    /// Structurally valid but unsolvable/unreachable cube
    Rejected { message: String },
    /// Transport failure or malformed response from the service
    Transport { message: String },
}

impl SolveError {
    pub fn reason(&self) -> ScanReason {
        match self {
            Self::Rejected { .. } => ScanReason::X001_SOLVER_REJECTED,
            Self::Transport { .. } => ScanReason::X002_TRANSPORT_FAILED,
        }
    }
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected { message } => write!(f, "solver rejected cube: {}", message),
            Self::Transport { message } => write!(f, "solving service unreachable: {}", message),
        }
    }
}

impl std::error::Error for SolveError {}

/// Progress record emitted after each accepted face
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceProgress {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// 1-based index of the face just captured (1..6)
    pub face_index: usize,
    /// The accepted face
    pub face: FaceString,
    /// Session phase after this capture
    pub phase: ScanPhase,
    /// Reason for this outcome
    pub reason: ScanReason,
}

impl FaceProgress {
    pub fn new(face_index: usize, face: FaceString, phase: ScanPhase, reason: ScanReason) -> Self {
        Self {
            timestamp: Utc::now(),
            face_index,
            face,
            phase,
            reason,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.phase.color_code();
        let reset = ScanPhase::color_reset();
        let emoji = self.phase.emoji();

        format!(
            "{}{} face {}/6 = {} | phase={} | {}{}",
            color,
            emoji,
            self.face_index,
            self.face,
            self.phase,
            self.reason.code(),
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "face={}/6 | labels={} | phase={} | reason={}",
            self.face_index,
            self.face,
            self.phase,
            self.reason.code()
        )
    }
}
