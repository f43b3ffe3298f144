//! Facelet label definitions

use serde::{Deserialize, Serialize};

/// The six canonical facelet labels, one per face orientation of the cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facelet {
    /// Up face
    U,
    /// Down face
    D,
    /// Front face
    F,
    /// Back face
    B,
    /// Left face
    L,
    /// Right face
    R,
}

/// Declaration order used everywhere an ordered walk over the labels is needed
pub const ALL_FACELETS: [Facelet; 6] = [
    Facelet::U,
    Facelet::D,
    Facelet::F,
    Facelet::B,
    Facelet::L,
    Facelet::R,
];

impl Facelet {
    /// All six labels in declaration order
    pub fn all() -> [Facelet; 6] {
        ALL_FACELETS
    }

    /// Single-character encoding used in face and cube strings
    pub fn as_char(&self) -> char {
        match self {
            Facelet::U => 'U',
            Facelet::D => 'D',
            Facelet::F => 'F',
            Facelet::B => 'B',
            Facelet::L => 'L',
            Facelet::R => 'R',
        }
    }

    /// Parse a single label character, None for anything outside the six
    pub fn from_char(c: char) -> Option<Facelet> {
        match c {
            'U' => Some(Facelet::U),
            'D' => Some(Facelet::D),
            'F' => Some(Facelet::F),
            'B' => Some(Facelet::B),
            'L' => Some(Facelet::L),
            'R' => Some(Facelet::R),
            _ => None,
        }
    }

    /// Index into count arrays, following declaration order
    pub fn index(&self) -> usize {
        match self {
            Facelet::U => 0,
            Facelet::D => 1,
            Facelet::F => 2,
            Facelet::B => 3,
            Facelet::L => 4,
            Facelet::R => 5,
        }
    }

    /// Human-readable face name for move instructions
    pub fn face_name(&self) -> &'static str {
        match self {
            Facelet::U => "Top",
            Facelet::D => "Bottom",
            Facelet::F => "Front",
            Facelet::B => "Back",
            Facelet::L => "Left",
            Facelet::R => "Right",
        }
    }

    /// ANSI color code matching the reference sticker color
    pub fn color_code(&self) -> &'static str {
        match self {
            Facelet::U => "\x1b[97m", // White
            Facelet::D => "\x1b[93m", // Yellow
            Facelet::F => "\x1b[32m", // Green
            Facelet::B => "\x1b[34m", // Blue
            Facelet::L => "\x1b[33m", // Orange
            Facelet::R => "\x1b[31m", // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl std::fmt::Display for Facelet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for label in Facelet::all() {
            assert_eq!(Facelet::from_char(label.as_char()), Some(label));
        }
    }

    #[test]
    fn test_unknown_char_rejected() {
        assert_eq!(Facelet::from_char('X'), None);
        assert_eq!(Facelet::from_char('u'), None);
    }

    #[test]
    fn test_indices_follow_declaration_order() {
        for (i, label) in Facelet::all().iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }
}
