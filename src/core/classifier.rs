//! Color classifier: nearest-color search over the reference table
//!
//! Classification is a pure nearest-neighbor lookup under squared Euclidean
//! distance in raw RGB. It is total: every sample maps to some label, however
//! far off. Lighting sensitivity is an accepted limitation of this policy,
//! not something to paper over with a smarter color model.

use crate::types::{Facelet, ReferenceTable, Rgb};

/// Nearest-color classifier over an injected reference table
#[derive(Debug, Clone)]
pub struct ColorClassifier {
    table: ReferenceTable,
}

impl Default for ColorClassifier {
    fn default() -> Self {
        Self::new(ReferenceTable::reference())
    }
}

impl ColorClassifier {
    /// Create a classifier over the given table
    pub fn new(table: ReferenceTable) -> Self {
        Self { table }
    }

    /// The table this classifier was built with
    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// Map a sample to the label of the nearest table entry.
    ///
    /// Ties break toward the earlier entry in table declaration order: the
    /// walk keeps the current best unless a strictly smaller distance shows
    /// up, so the first-declared of two equidistant labels wins.
    pub fn classify(&self, sample: Rgb) -> Facelet {
        let entries = self.table.entries();
        let mut best = entries[0].0;
        let mut best_dist = sample.distance_sq(&entries[0].1);

        for (label, color) in &entries[1..] {
            let dist = sample.distance_sq(color);
            if dist < best_dist {
                best = *label;
                best_dist = dist;
            }
        }

        best
    }
}

// =============================================================================
// TESTS
// =============================================================================
