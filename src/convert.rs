use serde::Deserialize;
use serde_json::Value;

use crate::domain::engine::{EngineError, NormalizedSolverOptions, SolverResult};
use crate::models::{ApiResponse, MaxCutPayload, QuboPayload, SolverOptionsInput};

pub const DEFAULT_MAX_STEPS: u64 = 2000;

/// `maxSteps ?? maxIterations ?? 2000`, seed passed through, `trace ?? false`.
pub fn to_solver_options(input: &SolverOptionsInput) -> NormalizedSolverOptions {
    NormalizedSolverOptions {
        max_steps: input
            .max_steps
            .or(input.max_iterations)
            .unwrap_or(DEFAULT_MAX_STEPS),
        seed: input.seed,
        trace: input.trace.unwrap_or(false),
    }
}

/// Read `options` from the request body; absent or `null` means all defaults.
pub fn options_from_body(body: &Value) -> Result<SolverOptionsInput, serde_json::Error> {
    match body.get("options") {
        None | Some(Value::Null) => Ok(SolverOptionsInput::default()),
        Some(options) => SolverOptionsInput::deserialize(options),
    }
}

pub fn to_qubo_payload(raw: Value) -> Result<QuboPayload, EngineError> {
    serde_json::from_value(raw)
        .map_err(|e| EngineError::InvalidPayload(format!("Invalid QUBO payload: {e}")))
}

pub fn to_max_cut_payload(raw: Value) -> Result<MaxCutPayload, EngineError> {
    serde_json::from_value(raw)
        .map_err(|e| EngineError::InvalidPayload(format!("Invalid Max-Cut payload: {e}")))
}

impl From<SolverResult> for ApiResponse {
    fn from(r: SolverResult) -> Self {
        ApiResponse {
            best_energy: r.best_energy,
            state: r.state,
            iterations: r.iterations,
            time_ms: r.time_ms,
            cut_value: r.cut_value,
        }
    }
}
