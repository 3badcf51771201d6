use crate::error::{GatewayClientError, Result};
use crate::types::{
    Edge, ErrorResponse, Graph, Problem, QuboTerm, SolveOptions, SolveRequest, SolveResponse,
};
use reqwest::{Client, Url};

const SOLVE_PATH: &str = "/api/solve";

/// HTTP client for the solve gateway
#[derive(Debug, Clone)]
pub struct QuboGatewayClient {
    client: Client,
    base_url: Url,
}

impl QuboGatewayClient {
    /// Create a new gateway client
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the gateway (e.g., "http://localhost:9000")
    ///
    /// # Example
    ///
    /// ```no_run
    /// use qubo_gateway_sdk::QuboGatewayClient;
    ///
    /// let client = QuboGatewayClient::new("http://localhost:9000").unwrap();
    /// ```
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new gateway client with a custom reqwest client
    ///
    /// This allows you to configure timeouts, proxies, etc. The gateway itself
    /// imposes no timeout on long solves.
    pub fn with_client(base_url: impl AsRef<str>, client: Client) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())
            .map_err(|e| GatewayClientError::InvalidUrl(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Minimize the energy of a sparse QUBO
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use qubo_gateway_sdk::{QuboGatewayClient, SolveOptions};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = QuboGatewayClient::new("http://localhost:9000")?;
    /// let response = client
    ///     .solve_qubo(vec![(0, 0, -1.0), (1, 1, -1.0), (0, 1, 1.0)], SolveOptions::default())
    ///     .await?;
    /// println!("Energy: {}", response.best_energy);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn solve_qubo(
        &self,
        terms: Vec<QuboTerm>,
        options: SolveOptions,
    ) -> Result<SolveResponse> {
        self.solve(&SolveRequest {
            problem: Problem::Qubo(terms),
            options,
        })
        .await
    }

    /// Partition `n` vertices to maximize the weight of crossing edges
    ///
    /// The response carries `cut_value`.
    pub async fn solve_max_cut(
        &self,
        n: usize,
        edges: Vec<Edge>,
        options: SolveOptions,
    ) -> Result<SolveResponse> {
        self.solve(&SolveRequest {
            problem: Problem::MaxCut(Graph { n, edges }),
            options,
        })
        .await
    }

    /// Send a prepared solve request
    pub async fn solve(&self, request: &SolveRequest) -> Result<SolveResponse> {
        let url = self
            .base_url
            .join(SOLVE_PATH)
            .map_err(|e| GatewayClientError::InvalidUrl(e.to_string()))?;

        let response = self.client.post(url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);

            return Err(GatewayClientError::ApiError { status, message });
        }

        response
            .json()
            .await
            .map_err(|e| GatewayClientError::ParseError(e.to_string()))
    }
}
