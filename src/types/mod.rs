//! Core types for cubescan

mod color;
mod face;
mod facelet;
mod moves;
mod outcome;
mod phase;

pub use color::{ReferenceTable, Rgb, TableError};
pub use face::{CubeState, FaceString};
pub use facelet::Facelet;
pub use moves::{Modifier, MoveToken};
pub use outcome::{
    AcquisitionError, FaceProgress, ScanReason, SessionError, SolveError, ValidationError,
};
pub use phase::ScanPhase;
