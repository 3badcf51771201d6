use serde::{Deserialize, Serialize};

/// One sparse QUBO entry `[i, j, weight]`
pub type QuboTerm = (usize, usize, f64);

/// One weighted edge `[u, v, weight]`
pub type Edge = (usize, usize, f64);

/// Graph for a Max-Cut problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Number of vertices
    pub n: usize,
    /// Weighted edges between vertices `0..n`
    pub edges: Vec<Edge>,
}

/// Problem description, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum Problem {
    /// Sparse upper-triangular QUBO
    Qubo(Vec<QuboTerm>),
    /// Weighted Max-Cut
    MaxCut(Graph),
}

/// Solver options; unset fields take the server defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveOptions {
    /// Step budget (server default 2000)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<u64>,
    /// Seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Ask the engine to record a trace (not returned by the API)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<bool>,
}

impl SolveOptions {
    /// Options with a fixed step budget and seed
    pub fn seeded(max_steps: u64, seed: i64) -> Self {
        Self {
            max_steps: Some(max_steps),
            seed: Some(seed),
            trace: None,
        }
    }
}

/// Request body for `POST /api/solve`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub problem: Problem,
    #[serde(default)]
    pub options: SolveOptions,
}

/// Successful response from the solve endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    /// Lowest energy found
    pub best_energy: f64,
    /// Best assignment, one 0/1 per variable
    pub state: Vec<u8>,
    /// Steps the engine performed
    pub iterations: u64,
    /// Wall-clock solve time in milliseconds
    pub time_ms: f64,
    /// Weight of the best cut (Max-Cut only)
    #[serde(default)]
    pub cut_value: Option<f64>,
}

/// Error body returned with any non-success status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_problem_serializes_with_kind_tag() {
        let qubo = serde_json::to_value(Problem::Qubo(vec![(0, 1, 1.0)])).unwrap();
        assert_eq!(qubo, json!({ "kind": "qubo", "payload": [[0, 1, 1.0]] }));

        let max_cut = serde_json::to_value(Problem::MaxCut(Graph {
            n: 2,
            edges: vec![(0, 1, 2.0)],
        }))
        .unwrap();
        assert_eq!(max_cut, json!({ "kind": "maxcut", "payload": { "n": 2, "edges": [[0, 1, 2.0]] } }));
    }

    #[test]
    fn test_default_options_serialize_empty() {
        assert_eq!(serde_json::to_value(SolveOptions::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_response_without_cut_value() {
        let response: SolveResponse = serde_json::from_value(json!({
            "bestEnergy": -1.0, "state": [1, 0], "iterations": 10, "timeMs": 0.2
        }))
        .unwrap();
        assert_eq!(response.cut_value, None);
    }
}
