//! Move translator: solver tokens to human-readable instructions
//!
//! Best-effort presentation, never a validation gate: a token outside the
//! `[UDFBLR]('|2)?` grammar passes through unchanged so one odd token cannot
//! abort the display of the rest of the sequence.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{Facelet, Modifier, MoveToken};

lazy_static! {
    /// Move token grammar: face letter plus optional modifier
    static ref RE_MOVE_TOKEN: Regex = Regex::new(r"^([UDFBLR])('|2)?$").unwrap();
}

/// Parse one token against the grammar; non-matches come back opaque
pub fn parse_token(token: &str) -> MoveToken {
    let caps = match RE_MOVE_TOKEN.captures(token) {
        Some(caps) => caps,
        None => return MoveToken::Opaque(token.to_string()),
    };

    // The grammar guarantees group 1 is a single facelet letter
    let face = caps
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .and_then(Facelet::from_char);
    let face = match face {
        Some(face) => face,
        None => return MoveToken::Opaque(token.to_string()),
    };

    let modifier = match caps.get(2).map(|m| m.as_str()) {
        None => Modifier::Clockwise,
        Some("'") => Modifier::CounterClockwise,
        Some("2") => Modifier::Double,
        Some(_) => return MoveToken::Opaque(token.to_string()),
    };

    MoveToken::Turn { face, modifier }
}

/// Translate one token into an instruction phrase
pub fn translate(token: &str) -> String {
    match parse_token(token) {
        MoveToken::Turn { face, modifier } => {
            format!("Rotate {} {}", face.face_name(), modifier.phrase())
        }
        MoveToken::Opaque(raw) => raw,
    }
}

/// Translate a whole sequence, one instruction per token, order preserved
pub fn translate_sequence(tokens: &[String]) -> Vec<String> {
    tokens.iter().map(|t| translate(t)).collect()
}

// =============================================================================
// TESTS
// =============================================================================
