//! RGB samples and the reference color table
//!
//! The table is injected configuration, not a fixed law: calibration for
//! different lighting swaps the table, never the classifier.

use serde::{Deserialize, Serialize};

use crate::types::Facelet;

/// One 8-bit RGB sample from the image source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance in raw RGB space. No normalization,
    /// no color-space conversion.
    pub fn distance_sq(&self, other: &Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

/// Error raised when a reference table fails its shape invariant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableError {
    /// Table must have exactly six entries
    WrongEntryCount { actual: usize },
    /// The same label appears more than once
    DuplicateLabel { label: Facelet },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::WrongEntryCount { actual } => {
                write!(f, "reference table needs 6 entries, got {}", actual)
            }
            TableError::DuplicateLabel { label } => {
                write!(f, "reference table has duplicate label {}", label)
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Mapping from facelet label to canonical RGB anchor, fixed for a session.
///
/// Entry order is significant: the classifier iterates in declaration order
/// and breaks distance ties in favor of the earlier entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceTable {
    entries: Vec<(Facelet, Rgb)>,
}

impl ReferenceTable {
    /// Build a table, enforcing exactly six entries and no duplicate labels
    pub fn new(entries: Vec<(Facelet, Rgb)>) -> Result<Self, TableError> {
        if entries.len() != 6 {
            return Err(TableError::WrongEntryCount {
                actual: entries.len(),
            });
        }
        let mut seen = [false; 6];
        for (label, _) in &entries {
            if seen[label.index()] {
                return Err(TableError::DuplicateLabel { label: *label });
            }
            seen[label.index()] = true;
        }
        Ok(Self { entries })
    }

    /// Reference mapping: white/yellow/green/blue/orange/red
    pub fn reference() -> Self {
        Self {
            entries: vec![
                (Facelet::U, Rgb::new(255, 255, 255)), // White
                (Facelet::D, Rgb::new(255, 255, 0)),   // Yellow
                (Facelet::F, Rgb::new(0, 155, 72)),    // Green
                (Facelet::B, Rgb::new(0, 70, 173)),    // Blue
                (Facelet::L, Rgb::new(255, 88, 0)),    // Orange
                (Facelet::R, Rgb::new(183, 18, 52)),   // Red
            ],
        }
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[(Facelet, Rgb)] {
        &self.entries
    }

    /// Anchor color for one label
    pub fn color_of(&self, label: Facelet) -> Rgb {
        // Shape invariant guarantees every label is present
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, c)| *c)
            .unwrap_or(Rgb::new(0, 0, 0))
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::reference()
    }
}
