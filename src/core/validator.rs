//! Cube state validator: structural gate before the network boundary
//!
//! Checks, in order: length 54, all characters are known labels, each label
//! occurs exactly 9 times. Solvability is deliberately NOT checked here; a
//! structurally valid but physically impossible cube is still forwarded and
//! may be rejected by the solving service. This gate only avoids needless
//! round-trips on obviously malformed scans.

use crate::types::{CubeState, Facelet, ValidationError};
use crate::{CUBE_FACELETS, FACELETS_PER_FACE};

/// Validate a raw cube string; success yields the immutable value object
pub fn validate(cube: &str) -> Result<CubeState, ValidationError> {
    if cube.chars().count() != CUBE_FACELETS {
        return Err(ValidationError::WrongLength {
            actual: cube.chars().count(),
        });
    }

    let mut labels = [Facelet::U; CUBE_FACELETS];
    for (position, c) in cube.chars().enumerate() {
        match Facelet::from_char(c) {
            Some(label) => labels[position] = label,
            None => return Err(ValidationError::UnknownLabel { position, found: c }),
        }
    }

    let mut counts = [0usize; 6];
    for label in &labels {
        counts[label.index()] += 1;
    }
    if counts.iter().any(|&c| c != FACELETS_PER_FACE) {
        return Err(ValidationError::LabelCountMismatch { counts });
    }

    Ok(CubeState::from_labels(labels))
}

// =============================================================================
// TESTS
// =============================================================================
