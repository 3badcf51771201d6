//! # QUBO Gateway Client
//!
//! A Rust client SDK for the `POST /api/solve` gateway, which minimizes QUBO energies
//! and solves weighted Max-Cut problems.
//!
//! ## Example
//!
//! ```no_run
//! use qubo_gateway_sdk::{QuboGatewayClient, SolveOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QuboGatewayClient::new("http://localhost:9000")?;
//!
//!     let response = client
//!         .solve_qubo(
//!             vec![(0, 0, -1.5), (1, 1, -2.0), (0, 1, 1.0)],
//!             SolveOptions::seeded(1000, 42),
//!         )
//!         .await?;
//!     println!("Best energy {} at {:?}", response.best_energy, response.state);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::QuboGatewayClient;
pub use error::{GatewayClientError, Result};
pub use types::{
    Edge, ErrorResponse, Graph, Problem, QuboTerm, SolveOptions, SolveRequest, SolveResponse,
};
