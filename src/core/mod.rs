//! Core pipeline modules for cubescan

pub mod api;
pub mod classifier;
pub mod sampler;
pub mod session;
pub mod solver;
pub mod translator;
pub mod validator;

pub use api::{create_router, run_server};
pub use classifier::ColorClassifier;
pub use sampler::{FrameSampler, GridBuffer, PixelBuffer};
pub use session::ScanSession;
pub use solver::{HttpSolver, MockSolver, SolverBackend};
pub use translator::{parse_token, translate, translate_sequence};
pub use validator::validate;
