use std::time::Instant;

use actix_web::web;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::engine::{EngineError, NormalizedSolverOptions, SolverResult, SolvingEngine};
use crate::models::{Edge, MaxCutPayload, QuboPayload, QuboTerm};

/// Final temperature as a fraction of the starting one.
const COOLING_RATIO: f64 = 1e-3;

/// Upper bound on variables (QUBO) or vertices (Max-Cut) in one problem.
pub const MAX_VARIABLES: usize = 1 << 20;

/// Trace points kept per solve; later sweeps are not recorded.
pub const MAX_TRACE_POINTS: usize = 10_000;

/// Single-bit-flip simulated annealing over a sparse QUBO
pub struct AnnealingEngine;

impl AnnealingEngine {
    pub fn new() -> Self {
        AnnealingEngine
    }
}

impl Default for AnnealingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear terms on the diagonal, symmetric adjacency for the couplings.
#[derive(Debug, Clone)]
struct QuboModel {
    linear: Vec<f64>,
    neighbors: Vec<Vec<(usize, f64)>>,
}

impl QuboModel {
    fn new(size: usize) -> Self {
        QuboModel {
            linear: vec![0.0; size],
            neighbors: vec![Vec::new(); size],
        }
    }

    fn from_terms(terms: &[QuboTerm]) -> Result<Self, EngineError> {
        let mut size = 0;
        for &QuboTerm(i, j, _) in terms {
            let needed = i.max(j).checked_add(1).filter(|&s| s <= MAX_VARIABLES);
            size = size.max(needed.ok_or_else(|| {
                EngineError::InvalidPayload(format!(
                    "Variable index {} exceeds the limit of {MAX_VARIABLES} variables",
                    i.max(j)
                ))
            })?);
        }
        let mut model = QuboModel::new(size);
        for &QuboTerm(i, j, w) in terms {
            model.add(i, j, w);
        }
        Ok(model)
    }

    /// Max-Cut as minimization of `-cut`: each edge adds `-w` to both endpoints and `+2w` to the pair.
    fn from_graph(n: usize, edges: &[Edge]) -> Result<Self, EngineError> {
        if n > MAX_VARIABLES {
            return Err(EngineError::InvalidPayload(format!(
                "Vertex count {n} exceeds the limit of {MAX_VARIABLES} vertices"
            )));
        }
        let mut model = QuboModel::new(n);
        for &Edge(u, v, w) in edges {
            if u >= n || v >= n {
                return Err(EngineError::InvalidPayload(format!(
                    "Edge ({u}, {v}) references a vertex outside 0..{n}"
                )));
            }
            if u == v {
                continue;
            }
            model.add(u, u, -w);
            model.add(v, v, -w);
            model.add(u, v, 2.0 * w);
        }
        Ok(model)
    }

    fn add(&mut self, i: usize, j: usize, w: f64) {
        if i == j {
            self.linear[i] += w;
        } else {
            self.neighbors[i].push((j, w));
            self.neighbors[j].push((i, w));
        }
    }

    fn size(&self) -> usize {
        self.linear.len()
    }

    fn energy(&self, state: &[u8]) -> f64 {
        let mut energy = 0.0;
        for (i, &x) in state.iter().enumerate() {
            if x == 0 {
                continue;
            }
            energy += self.linear[i];
            // Each coupling is stored twice; count it from its lower endpoint only.
            energy += self.neighbors[i]
                .iter()
                .filter(|&&(j, _)| j > i && state[j] == 1)
                .map(|&(_, w)| w)
                .sum::<f64>();
        }
        energy
    }

    fn flip_delta(&self, state: &[u8], k: usize) -> f64 {
        let field = self.linear[k]
            + self.neighbors[k]
                .iter()
                .filter(|&&(j, _)| state[j] == 1)
                .map(|&(_, w)| w)
                .sum::<f64>();
        if state[k] == 0 {
            field
        } else {
            -field
        }
    }

    /// Largest energy change a single flip can cause; sets the starting temperature.
    fn energy_scale(&self) -> f64 {
        (0..self.size())
            .map(|k| {
                self.linear[k].abs() + self.neighbors[k].iter().map(|(_, w)| w.abs()).sum::<f64>()
            })
            .fold(0.0, f64::max)
    }
}

#[derive(Debug)]
struct AnnealOutcome {
    state: Vec<u8>,
    energy: f64,
    iterations: u64,
    accepted_moves: u64,
    trace: Option<Vec<f64>>,
}

fn anneal(model: &QuboModel, options: NormalizedSolverOptions) -> AnnealOutcome {
    let n = model.size();
    if n == 0 {
        return AnnealOutcome {
            state: Vec::new(),
            energy: 0.0,
            iterations: 0,
            accepted_moves: 0,
            trace: options.trace.then(Vec::new),
        };
    }

    let mut rng = match options.seed {
        // Negative seeds keep their bit pattern.
        Some(seed) => StdRng::seed_from_u64(seed as u64),
        None => StdRng::from_entropy(),
    };

    let mut state: Vec<u8> = (0..n).map(|_| rng.gen_range(0..=1)).collect();
    let mut energy = model.energy(&state);
    let mut best_state = state.clone();
    let mut best_energy = energy;
    let mut accepted_moves = 0;
    let mut trace = options.trace.then(Vec::new);

    let scale = model.energy_scale();
    let t_start = if scale > 0.0 { scale } else { 1.0 };
    let t_end = t_start * COOLING_RATIO;
    let span = options.max_steps.saturating_sub(1).max(1) as f64;

    for step in 0..options.max_steps {
        let temperature = t_start * (t_end / t_start).powf(step as f64 / span);
        let k = rng.gen_range(0..n);
        let delta = model.flip_delta(&state, k);

        if delta <= 0.0 || rng.gen::<f64>() < (-delta / temperature).exp() {
            state[k] ^= 1;
            energy += delta;
            accepted_moves += 1;
            if energy < best_energy {
                best_energy = energy;
                best_state.copy_from_slice(&state);
            }
        }

        if let Some(trace) = trace.as_mut() {
            if (step + 1) % n as u64 == 0 && trace.len() < MAX_TRACE_POINTS {
                trace.push(energy);
            }
        }
    }

    AnnealOutcome {
        // Recomputed to shed drift from the incremental updates.
        energy: model.energy(&best_state),
        state: best_state,
        iterations: options.max_steps,
        accepted_moves,
        trace,
    }
}

fn cut_value(edges: &[Edge], state: &[u8]) -> f64 {
    edges
        .iter()
        .filter(|e| e.0 != e.1 && state[e.0] != state[e.1])
        .map(|e| e.2)
        .sum()
}

fn to_result(outcome: AnnealOutcome, started: Instant, cut_value: Option<f64>) -> SolverResult {
    SolverResult {
        best_energy: outcome.energy,
        state: outcome.state,
        iterations: outcome.iterations,
        time_ms: started.elapsed().as_secs_f64() * 1000.0,
        cut_value,
        trace: outcome.trace,
        accepted_moves: outcome.accepted_moves,
    }
}

fn solve_qubo_blocking(
    payload: QuboPayload,
    options: NormalizedSolverOptions,
) -> Result<SolverResult, EngineError> {
    let started = Instant::now();
    let model = QuboModel::from_terms(&payload)?;
    Ok(to_result(anneal(&model, options), started, None))
}

fn solve_max_cut_blocking(
    payload: MaxCutPayload,
    options: NormalizedSolverOptions,
) -> Result<SolverResult, EngineError> {
    let started = Instant::now();
    let model = QuboModel::from_graph(payload.n, &payload.edges)?;
    let outcome = anneal(&model, options);
    let cut = cut_value(&payload.edges, &outcome.state);
    Ok(to_result(outcome, started, Some(cut)))
}

#[async_trait]
impl SolvingEngine for AnnealingEngine {
    async fn solve_qubo(
        &self,
        payload: QuboPayload,
        options: NormalizedSolverOptions,
    ) -> Result<SolverResult, EngineError> {
        web::block(move || solve_qubo_blocking(payload, options))
            .await
            .map_err(|e| EngineError::Failed(e.to_string()))?
    }

    async fn solve_max_cut(
        &self,
        payload: MaxCutPayload,
        options: NormalizedSolverOptions,
    ) -> Result<SolverResult, EngineError> {
        web::block(move || solve_max_cut_blocking(payload, options))
            .await
            .map_err(|e| EngineError::Failed(e.to_string()))?
    }

    fn name(&self) -> &str {
        "annealing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(max_steps: u64, seed: i64) -> NormalizedSolverOptions {
        NormalizedSolverOptions {
            max_steps,
            seed: Some(seed),
            trace: false,
        }
    }

    fn square() -> MaxCutPayload {
        MaxCutPayload {
            n: 4,
            edges: vec![
                Edge(0, 1, 1.0),
                Edge(1, 2, 1.0),
                Edge(2, 3, 1.0),
                Edge(3, 0, 1.0),
            ],
        }
    }

    #[test]
    fn test_energy_and_flip_delta_agree() {
        let model = QuboModel::from_terms(&[QuboTerm(0, 0, -1.5), QuboTerm(1, 1, -2.0), QuboTerm(0, 1, 1.0)])
            .unwrap();
        assert_eq!(model.energy(&[0, 0]), 0.0);
        assert_eq!(model.energy(&[1, 0]), -1.5);
        assert_eq!(model.energy(&[1, 1]), -2.5);
        assert_eq!(model.flip_delta(&[1, 0], 1), -1.0);
        assert_eq!(model.flip_delta(&[1, 1], 0), 0.5);
    }

    #[test]
    fn test_anneal_finds_small_qubo_optimum() {
        let model = QuboModel::from_terms(&[QuboTerm(0, 0, -1.5), QuboTerm(1, 1, -2.0), QuboTerm(0, 1, 1.0)])
            .unwrap();
        let outcome = anneal(&model, options(1000, 42));
        assert_eq!(outcome.state, vec![1, 1]);
        assert_eq!(outcome.energy, -2.5);
        assert_eq!(outcome.iterations, 1000);
    }

    #[test]
    fn test_anneal_is_deterministic_for_fixed_seed() {
        let model = QuboModel::from_graph(4, &square().edges).unwrap();
        let a = anneal(&model, options(200, 7));
        let b = anneal(&model, options(200, 7));
        assert_eq!(a.state, b.state);
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    fn test_anneal_with_no_variables_returns_empty_state() {
        let outcome = anneal(&QuboModel::from_terms(&[]).unwrap(), options(500, 1));
        assert!(outcome.state.is_empty());
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.energy, 0.0);
    }

    #[test]
    fn test_trace_records_one_energy_per_sweep() {
        let model = QuboModel::from_terms(&[QuboTerm(0, 1, 1.0)]).unwrap();
        let outcome = anneal(
            &model,
            NormalizedSolverOptions {
                max_steps: 10,
                seed: Some(3),
                trace: true,
            },
        );
        assert_eq!(outcome.trace.map(|t| t.len()), Some(5));
    }

    #[test]
    fn test_max_cut_on_square_cuts_every_edge() {
        let result = solve_max_cut_blocking(square(), options(2000, 11)).unwrap();
        assert_eq!(result.cut_value, Some(4.0));
        assert_eq!(result.best_energy, -4.0);
        assert_eq!(result.state.len(), 4);
    }

    #[test]
    fn test_max_cut_rejects_out_of_range_vertex() {
        let payload = MaxCutPayload {
            n: 2,
            edges: vec![Edge(0, 5, 1.0)],
        };
        assert!(matches!(
            solve_max_cut_blocking(payload, options(10, 1)),
            Err(EngineError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_trace_stops_at_point_limit() {
        let model = QuboModel::from_terms(&[QuboTerm(0, 0, 1.0)]).unwrap();
        let outcome = anneal(
            &model,
            NormalizedSolverOptions {
                max_steps: (MAX_TRACE_POINTS as u64) * 3,
                seed: Some(3),
                trace: true,
            },
        );
        assert_eq!(outcome.trace.map(|t| t.len()), Some(MAX_TRACE_POINTS));
    }

    #[test]
    fn test_max_cut_rejects_vertex_count_over_limit() {
        let payload = MaxCutPayload {
            n: 1 << 44,
            edges: vec![],
        };
        match solve_max_cut_blocking(payload, options(10, 1)) {
            Err(EngineError::InvalidPayload(message)) => assert!(message.contains("exceeds")),
            other => panic!("expected an invalid payload error, got {other:?}"),
        }
    }

    #[test]
    fn test_qubo_rejects_index_over_limit() {
        for term in [QuboTerm(usize::MAX, 0, 1.0), QuboTerm(0, MAX_VARIABLES, 1.0)] {
            match solve_qubo_blocking(vec![term], options(10, 1)) {
                Err(EngineError::InvalidPayload(message)) => assert!(message.contains("exceeds")),
                other => panic!("expected an invalid payload error, got {other:?}"),
            }
        }
        let last = QuboTerm(MAX_VARIABLES - 1, 0, 1.0);
        assert!(QuboModel::from_terms(&[last]).is_ok());
    }

    #[test]
    fn test_negative_seed_is_deterministic() {
        let model = QuboModel::from_graph(4, &square().edges).unwrap();
        let a = anneal(&model, options(200, -1));
        let b = anneal(&model, options(200, -1));
        assert_eq!(a.state, b.state);
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[tokio::test]
    async fn test_engine_solves_qubo_on_blocking_pool() {
        let engine = AnnealingEngine::new();
        let result = engine
            .solve_qubo(vec![QuboTerm(0, 0, -1.0), QuboTerm(1, 1, -1.0), QuboTerm(0, 1, 1.0)], options(500, 5))
            .await
            .unwrap();
        assert_eq!(result.state.len(), 2);
        assert!(result.iterations <= 500);
        assert!(result.time_ms >= 0.0);
        assert!(result.cut_value.is_none());
        assert_eq!(engine.name(), "annealing");
    }
}
