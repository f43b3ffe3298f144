//! Move token model
//!
//! Tokens come from the external solving service and match `[UDFBLR]('|2)?`.
//! Anything outside that grammar is carried as opaque text so an odd token
//! never aborts the rest of a sequence.

use serde::{Deserialize, Serialize};

use crate::types::Facelet;

/// Turn amount/direction suffix of a move token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    /// No suffix
    Clockwise,
    /// `'` suffix
    CounterClockwise,
    /// `2` suffix
    Double,
}

impl Modifier {
    /// Direction phrase used in instructions
    pub fn phrase(&self) -> &'static str {
        match self {
            Modifier::Clockwise => "Clockwise",
            Modifier::CounterClockwise => "Counter-Clockwise",
            Modifier::Double => "Twice",
        }
    }

    /// Token suffix encoding
    pub fn suffix(&self) -> &'static str {
        match self {
            Modifier::Clockwise => "",
            Modifier::CounterClockwise => "'",
            Modifier::Double => "2",
        }
    }
}

/// One solver-emitted move token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveToken {
    /// A recognized turn: face letter plus modifier
    Turn { face: Facelet, modifier: Modifier },
    /// Anything that does not match the token grammar, kept verbatim
    Opaque(String),
}

impl std::fmt::Display for MoveToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveToken::Turn { face, modifier } => {
                write!(f, "{}{}", face.as_char(), modifier.suffix())
            }
            MoveToken::Opaque(raw) => write!(f, "{}", raw),
        }
    }
}
