//! Scan session: bounded accumulator for the six face strings
//!
//! Phase transitions:
//! - EMPTY → SCANNING: first face accepted
//! - SCANNING → READY: sixth face accepted
//! - READY → EMPTY: reset
//!
//! The session tracks progress only; face content is the sampler's business
//! and whole-cube structure is the validator's, checked before anything
//! leaves for the network.

use crate::types::{FaceProgress, FaceString, ScanPhase, ScanReason, SessionError};
use crate::FACE_COUNT;

/// Explicit session value object, exclusively owned by one scanning flow
#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    /// Accepted faces in capture order (0..6)
    faces: Vec<FaceString>,
}

impl ScanSession {
    /// Begin an empty session
    pub fn new() -> Self {
        Self { faces: Vec::new() }
    }

    /// Current phase, derived from the number of accepted faces
    pub fn phase(&self) -> ScanPhase {
        match self.faces.len() {
            0 => ScanPhase::Empty,
            n if n < FACE_COUNT => ScanPhase::Scanning,
            _ => ScanPhase::Ready,
        }
    }

    /// Number of faces captured so far
    pub fn captured(&self) -> usize {
        self.faces.len()
    }

    /// 1-based index of the next face to capture, None once READY
    pub fn cursor(&self) -> Option<usize> {
        if self.faces.len() < FACE_COUNT {
            Some(self.faces.len() + 1)
        } else {
            None
        }
    }

    /// Accepted faces in capture order
    pub fn faces(&self) -> &[FaceString] {
        &self.faces
    }

    /// Append a face and advance the cursor.
    ///
    /// Rejected without state change once the session holds 6 faces; the
    /// caller must reset first.
    pub fn submit_face(&mut self, face: FaceString) -> Result<FaceProgress, SessionError> {
        if self.faces.len() >= FACE_COUNT {
            return Err(SessionError::AlreadyComplete);
        }

        self.faces.push(face);
        let index = self.faces.len();
        let phase = self.phase();
        let reason = if phase == ScanPhase::Ready {
            ScanReason::S002_SESSION_COMPLETE
        } else {
            ScanReason::S001_FACE_ACCEPTED
        };

        Ok(FaceProgress::new(index, face, phase, reason))
    }

    /// Are all 6 faces captured?
    pub fn is_complete(&self) -> bool {
        self.faces.len() == FACE_COUNT
    }

    /// Concatenated 54-character cube string, faces in capture order.
    ///
    /// Only defined in READY; earlier calls are a precondition violation.
    /// The raw string still owes the validator a pass before it may leave
    /// the pipeline.
    pub fn cube_string(&self) -> Result<String, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::NotReady {
                captured: self.faces.len(),
            });
        }
        Ok(self.faces.iter().map(|f| f.to_string()).collect())
    }

    /// Discard all accepted faces and return to EMPTY
    pub fn reset(&mut self) {
        self.faces.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================
