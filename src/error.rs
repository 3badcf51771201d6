use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::domain::engine::EngineError;
use crate::response;

const INTERNAL_FALLBACK: &str = "Internal server error";

/// Every way a request can end without a solution. The `Display` text is the `error` body.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Method not allowed. Use POST.")]
    MethodNotAllowed,
    #[error("Not found. Use POST /api/solve")]
    NotFound,
    #[error("Missing \"problem\" in request body")]
    MissingProblem,
    #[error("Invalid QUBO problem. Expected {{ kind: \"qubo\", payload: [[i, j, weight], ...] }}")]
    InvalidQubo,
    #[error("Invalid Max-Cut problem. Expected {{ kind: \"maxcut\", payload: {{ n, edges }} }}")]
    InvalidMaxCut,
    #[error("Unknown problem kind. Use \"qubo\" or \"maxcut\"")]
    UnknownKind,
    /// Body parsing, payload decoding and engine failures all end up here.
    #[error("{}", internal_message(.0))]
    Internal(String),
}

fn internal_message(message: &str) -> &str {
    if message.is_empty() {
        INTERNAL_FALLBACK
    } else {
        message
    }
}

impl GatewayError {
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::NotFound => StatusCode::NOT_FOUND,
            GatewayError::MissingProblem
            | GatewayError::InvalidQubo
            | GatewayError::InvalidMaxCut
            | GatewayError::UnknownKind => StatusCode::BAD_REQUEST,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        response::error(self.status_code(), self.to_string())
    }
}

impl From<EngineError> for GatewayError {
    fn from(err: EngineError) -> Self {
        GatewayError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Internal(err.to_string())
    }
}

impl From<actix_web::Error> for GatewayError {
    fn from(err: actix_web::Error) -> Self {
        GatewayError::Internal(err.to_string())
    }
}
