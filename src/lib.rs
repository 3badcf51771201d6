//! HTTP gateway in front of a QUBO / Max-Cut solving engine.
//!
//! `POST /api/solve` takes `{ problem, options? }`, validates the problem, normalizes the
//! options, hands both to a [`SolvingEngine`] and returns a flattened result.

pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod models;
pub mod response;
pub mod solve;

pub use config::ServerConfig;
pub use domain::engine::{EngineError, NormalizedSolverOptions, SolverResult, SolvingEngine};
pub use domain::engines::AnnealingEngine;
pub use error::GatewayError;
pub use solve::{configure, handle, SOLVE_PATH};
