use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, HttpResponseBuilder};
use serde::Serialize;

use crate::models::ApiErrorResponse;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Every response leaves through here so the CORS header set cannot drift between branches.
fn with_cors(status: StatusCode) -> HttpResponseBuilder {
    let mut builder = HttpResponse::build(status);
    builder
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS));
    builder
}

/// Empty preflight answer.
pub fn preflight() -> HttpResponse {
    with_cors(StatusCode::NO_CONTENT).finish()
}

pub fn json<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    with_cors(status).json(body)
}

pub fn error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    json(
        status,
        &ApiErrorResponse {
            error: message.into(),
        },
    )
}
