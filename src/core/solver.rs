//! Solving-service client
//!
//! The search algorithm itself is a black box behind an HTTP endpoint:
//! `GET {base}/solve?cube=<54 chars>` answering `{"solution": "R U R' U'"}`.
//! A 4xx answer means the cube is structurally fine but not reachable; that
//! outcome stays distinct from transport trouble because the remediation
//! differs (rescan vs. retry).

use serde::Deserialize;

use crate::types::{CubeState, SolveError};

/// Wire shape of a successful solve response
#[derive(Debug, Deserialize)]
struct SolveResponse {
    solution: String,
}

/// HTTP client for the external solving service
#[derive(Debug, Clone)]
pub struct HttpSolver {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSolver {
    /// Create a client against the given service base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Submit a validated cube and return the move tokens
    pub async fn solve(&self, cube: &CubeState) -> Result<Vec<String>, SolveError> {
        let url = format!("{}/solve", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[("cube", cube.as_string())])
            .send()
            .await
            .map_err(|e| SolveError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_client_error() {
            let message = response.text().await.unwrap_or_default();
            return Err(SolveError::Rejected { message });
        }
        if !status.is_success() {
            return Err(SolveError::Transport {
                message: format!("service answered {}", status),
            });
        }

        let body: SolveResponse =
            response.json().await.map_err(|e| SolveError::Transport {
                message: format!("malformed solve response: {}", e),
            })?;

        Ok(split_solution(&body.solution))
    }
}

/// Canned solver for tests and offline CLI runs
#[derive(Debug, Clone)]
pub struct MockSolver {
    outcome: Result<Vec<String>, SolveError>,
}

impl MockSolver {
    /// Always answers with the given move sequence
    pub fn with_moves(moves: Vec<&str>) -> Self {
        Self {
            outcome: Ok(moves.into_iter().map(String::from).collect()),
        }
    }

    /// Always rejects, simulating an unreachable cube
    pub fn rejecting(message: &str) -> Self {
        Self {
            outcome: Err(SolveError::Rejected {
                message: message.to_string(),
            }),
        }
    }

    pub fn solve(&self, _cube: &CubeState) -> Result<Vec<String>, SolveError> {
        self.outcome.clone()
    }
}

impl Default for MockSolver {
    fn default() -> Self {
        Self::with_moves(vec!["R", "U", "R'", "U'"])
    }
}

/// Configured solving backend, picked at startup
#[derive(Debug, Clone)]
pub enum SolverBackend {
    Mock(MockSolver),
    Http(HttpSolver),
}

impl SolverBackend {
    /// At most one solve call is in flight per session; the caller
    /// serializes submissions.
    pub async fn solve(&self, cube: &CubeState) -> Result<Vec<String>, SolveError> {
        match self {
            SolverBackend::Mock(mock) => mock.solve(cube),
            SolverBackend::Http(http) => http.solve(cube).await,
        }
    }
}

/// Split a whitespace-joined solution string into move tokens
fn split_solution(solution: &str) -> Vec<String> {
    solution.split_whitespace().map(String::from).collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validate;

    fn solved_cube() -> CubeState {
        validate("UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB").unwrap()
    }

    #[test]
    fn test_split_solution() {
        assert_eq!(split_solution("R U R' U'"), vec!["R", "U", "R'", "U'"]);
        assert_eq!(split_solution("  F2   B  "), vec!["F2", "B"]);
        assert!(split_solution("").is_empty());
    }

    #[test]
    fn test_mock_solver_moves() {
        let mock = MockSolver::with_moves(vec!["U", "R'", "F2"]);
        let moves = mock.solve(&solved_cube()).unwrap();
        assert_eq!(moves, vec!["U", "R'", "F2"]);
    }

    #[test]
    fn test_mock_solver_rejection_is_distinct() {
        let mock = MockSolver::rejecting("unreachable state");
        let err = mock.solve(&solved_cube()).unwrap_err();
        assert_eq!(
            err,
            SolveError::Rejected {
                message: "unreachable state".to_string()
            }
        );
        assert_ne!(
            err.reason(),
            SolveError::Transport {
                message: String::new()
            }
            .reason()
        );
    }
}
