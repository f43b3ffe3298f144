//! Scan session phase definitions

use serde::{Deserialize, Serialize};

/// The three phases of a scan session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanPhase {
    /// No faces captured yet
    Empty,
    /// 1 to 5 faces captured
    Scanning,
    /// All 6 faces captured, cube string available
    Ready,
}

impl ScanPhase {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            ScanPhase::Empty => "\x1b[90m",    // Gray
            ScanPhase::Scanning => "\x1b[33m", // Orange/Yellow
            ScanPhase::Ready => "\x1b[32m",    // Green
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for phase
    pub fn emoji(&self) -> &'static str {
        match self {
            ScanPhase::Empty => "⬜",
            ScanPhase::Scanning => "📷",
            ScanPhase::Ready => "🧩",
        }
    }
}

impl std::fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScanPhase::Empty => "EMPTY",
            ScanPhase::Scanning => "SCANNING",
            ScanPhase::Ready => "READY",
        };
        write!(f, "{}", name)
    }
}
