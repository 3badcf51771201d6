use async_trait::async_trait;
use thiserror::Error;

use crate::models::{MaxCutPayload, QuboPayload};

/// Options handed verbatim to the solving engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedSolverOptions {
    pub max_steps: u64,
    pub seed: Option<i64>,
    pub trace: bool,
}

/// Raw engine output. Diagnostic fields stay on this side of the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    pub best_energy: f64,
    pub state: Vec<u8>,
    pub iterations: u64,
    pub time_ms: f64,
    /// Only set by Max-Cut solves.
    pub cut_value: Option<f64>,
    /// Energy after every sweep, recorded when `trace` is requested.
    pub trace: Option<Vec<f64>>,
    pub accepted_moves: u64,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    InvalidPayload(String),
    #[error("{0}")]
    Failed(String),
}

/// Common interface for QUBO / Max-Cut solving backends
#[async_trait]
pub trait SolvingEngine: Send + Sync {
    /// Minimize the energy of a sparse upper-triangular QUBO
    ///
    /// # Arguments
    /// * `payload` - `[i, j, weight]` entries
    /// * `options` - Normalized step budget, seed and trace flag
    async fn solve_qubo(
        &self,
        payload: QuboPayload,
        options: NormalizedSolverOptions,
    ) -> Result<SolverResult, EngineError>;

    /// Find a two-way vertex partition maximizing the crossing edge weight
    ///
    /// The returned result must carry `cut_value`.
    async fn solve_max_cut(
        &self,
        payload: MaxCutPayload,
        options: NormalizedSolverOptions,
    ) -> Result<SolverResult, EngineError>;

    /// Get the engine name for logging/debugging
    fn name(&self) -> &str;
}
