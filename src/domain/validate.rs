use serde_json::Value;

use crate::error::GatewayError;

pub const KIND_QUBO: &str = "qubo";
pub const KIND_MAX_CUT: &str = "maxcut";

/// A problem whose shape passed the structural checks. The payload is still the raw
/// JSON; decoding it into typed triples happens at dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedProblem {
    Qubo(Value),
    MaxCut(Value),
}

impl ValidatedProblem {
    pub fn kind(&self) -> &'static str {
        match self {
            ValidatedProblem::Qubo(_) => KIND_QUBO,
            ValidatedProblem::MaxCut(_) => KIND_MAX_CUT,
        }
    }
}

/// JSON truthiness: `null`, `false`, `0`, `""` (and absence) count as missing.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Pull `problem` out of the parsed body and check it against its `kind`.
pub fn validate_problem(body: &Value) -> Result<ValidatedProblem, GatewayError> {
    let problem = match body.get("problem") {
        Some(problem) if is_truthy(Some(problem)) => problem,
        _ => return Err(GatewayError::MissingProblem),
    };

    match problem.get("kind").and_then(Value::as_str) {
        Some(KIND_QUBO) => validate_qubo(problem.get("payload")),
        Some(KIND_MAX_CUT) => validate_max_cut(problem.get("payload")),
        _ => Err(GatewayError::UnknownKind),
    }
}

fn validate_qubo(payload: Option<&Value>) -> Result<ValidatedProblem, GatewayError> {
    match payload {
        Some(terms @ Value::Array(_)) => Ok(ValidatedProblem::Qubo(terms.clone())),
        _ => Err(GatewayError::InvalidQubo),
    }
}

fn validate_max_cut(payload: Option<&Value>) -> Result<ValidatedProblem, GatewayError> {
    // n = 0 is rejected together with a missing n.
    match payload {
        Some(graph)
            if is_truthy(payload) && is_truthy(graph.get("n")) && is_truthy(graph.get("edges")) =>
        {
            Ok(ValidatedProblem::MaxCut(graph.clone()))
        }
        _ => Err(GatewayError::InvalidMaxCut),
    }
}
