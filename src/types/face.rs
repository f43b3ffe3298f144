//! Face and cube string value objects

use serde::{Deserialize, Serialize};

use crate::types::Facelet;
use crate::{CUBE_FACELETS, FACELETS_PER_FACE};

/// One scanned face: exactly 9 labels in row-major grid order
/// (row 0 left-to-right, then row 1, then row 2).
///
/// Created atomically by the frame sampler from one image and immutable
/// once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceString([Facelet; FACELETS_PER_FACE]);

impl FaceString {
    pub fn new(labels: [Facelet; FACELETS_PER_FACE]) -> Self {
        Self(labels)
    }

    /// A face showing a single label on all nine facelets
    pub fn uniform(label: Facelet) -> Self {
        Self([label; FACELETS_PER_FACE])
    }

    /// Parse a 9-character label string, None if length or any label is off
    pub fn parse(s: &str) -> Option<Self> {
        let mut labels = [Facelet::U; FACELETS_PER_FACE];
        let mut count = 0;
        for c in s.chars() {
            if count == FACELETS_PER_FACE {
                return None;
            }
            labels[count] = Facelet::from_char(c)?;
            count += 1;
        }
        if count == FACELETS_PER_FACE {
            Some(Self(labels))
        } else {
            None
        }
    }

    pub fn labels(&self) -> &[Facelet; FACELETS_PER_FACE] {
        &self.0
    }

    /// Label at grid position (row, col), both 0..2
    pub fn at(&self, row: usize, col: usize) -> Facelet {
        self.0[row * 3 + col]
    }
}

impl std::fmt::Display for FaceString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for label in &self.0 {
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

/// A validated cube state: 54 labels, 6 face blocks in capture order.
///
/// Only the validator constructs this; it is a value object and never
/// mutated afterwards. A new scan session produces a new cube state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState([Facelet; CUBE_FACELETS]);

impl CubeState {
    /// Crate-internal constructor, reached through the validator
    pub(crate) fn from_labels(labels: [Facelet; CUBE_FACELETS]) -> Self {
        Self(labels)
    }

    pub fn labels(&self) -> &[Facelet; CUBE_FACELETS] {
        &self.0
    }

    /// The 54-character wire encoding sent to the solving service
    pub fn as_string(&self) -> String {
        self.0.iter().map(|l| l.as_char()).collect()
    }

    /// Face block at scan index 0..5
    pub fn face_block(&self, index: usize) -> FaceString {
        let mut labels = [Facelet::U; FACELETS_PER_FACE];
        labels.copy_from_slice(&self.0[index * FACELETS_PER_FACE..(index + 1) * FACELETS_PER_FACE]);
        FaceString::new(labels)
    }
}

impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
