use std::sync::Arc;

use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;

use crate::convert::{options_from_body, to_max_cut_payload, to_qubo_payload, to_solver_options};
use crate::domain::engine::SolvingEngine;
use crate::domain::validate::{validate_problem, ValidatedProblem};
use crate::error::GatewayError;
use crate::models::ApiResponse;
use crate::response;

pub const SOLVE_PATH: &str = "/api/solve";

/// Wire the gateway into an `App`. Every method and path lands in [`handle`].
pub fn configure(
    engine: Arc<dyn SolvingEngine>,
    payload_limit: usize,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::from(engine))
            .app_data(web::PayloadConfig::new(payload_limit))
            .default_service(web::to(handle));
    }
}

/// OPTIONS, then method, then route; only `POST /api/solve` reaches the solver.
pub async fn handle(
    req: HttpRequest,
    body: Result<web::Bytes, actix_web::Error>,
    engine: web::Data<dyn SolvingEngine>,
) -> Result<HttpResponse, GatewayError> {
    if req.method() == Method::OPTIONS {
        return Ok(response::preflight());
    }
    if req.method() != Method::POST {
        log::warn!("Rejected {} {}: method not allowed", req.method(), req.path());
        return Err(GatewayError::MethodNotAllowed);
    }
    if req.path() != SOLVE_PATH {
        log::warn!("Rejected POST {}: no such route", req.path());
        return Err(GatewayError::NotFound);
    }

    match solve(body, engine.get_ref()).await {
        Ok(solution) => Ok(response::json(StatusCode::OK, &solution)),
        Err(err) if err.is_client_error() => {
            log::warn!("Rejected solve request: {}", err);
            Err(err)
        }
        Err(err) => {
            log::error!("Solve error: {}", err);
            Err(err)
        }
    }
}

/// Parse, validate, normalize, dispatch. Any failure past validation is a 500.
async fn solve(
    body: Result<web::Bytes, actix_web::Error>,
    engine: &dyn SolvingEngine,
) -> Result<ApiResponse, GatewayError> {
    let body: Value = serde_json::from_slice(&body?)?;
    let problem = validate_problem(&body)?;
    let options = to_solver_options(&options_from_body(&body)?);

    log::debug!(
        "Dispatching {} problem to {} engine with {:?}",
        problem.kind(),
        engine.name(),
        options
    );

    let result = match problem {
        ValidatedProblem::Qubo(raw) => engine.solve_qubo(to_qubo_payload(raw)?, options).await?,
        ValidatedProblem::MaxCut(raw) => {
            engine.solve_max_cut(to_max_cut_payload(raw)?, options).await?
        }
    };

    Ok(result.into())
}
