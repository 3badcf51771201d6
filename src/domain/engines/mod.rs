pub mod annealing;

pub use annealing::AnnealingEngine;
