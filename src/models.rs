use serde::{Deserialize, Serialize};

// ---------- API (wire) types: owned & serde-friendly ----------

/// One sparse entry `[i, j, weight]` of an upper-triangular QUBO matrix.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct QuboTerm(pub usize, pub usize, pub f64);

pub type QuboPayload = Vec<QuboTerm>;

/// Weighted undirected edge `[u, v, weight]`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Edge(pub usize, pub usize, pub f64);

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MaxCutPayload {
    pub n: usize,
    pub edges: Vec<Edge>,
}

/// Caller-supplied solver options. Every field is optional; unknown keys are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolverOptionsInput {
    pub max_steps: Option<u64>,
    /// Legacy alias of `max_steps`.
    pub max_iterations: Option<u64>,
    pub seed: Option<i64>,
    pub trace: Option<bool>,
}

// ---------- API response types (decoupled from the engine) ----------

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub best_energy: f64,
    pub state: Vec<u8>,
    pub iterations: u64,
    pub time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cut_value: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiErrorResponse {
    pub error: String,
}
