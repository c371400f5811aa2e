use crate::search::{
    heuristics::{Manhattan, ZeroHeuristic},
    TaxiState,
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = i64;

pub trait Heuristic: Debug {
    /// Estimate the remaining cost from the given state. Must be
    /// non-negative.
    fn evaluate(&self, state: &TaxiState) -> HeuristicValue;

    /// Evaluate a batch of states. The default implementation simply calls
    /// `evaluate` for each state sequentially.
    fn evaluate_batch(&self, states: &[TaxiState]) -> Vec<HeuristicValue> {
        states.iter().map(|state| self.evaluate(state)).collect()
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "Manhattan distance from the taxi to the next pickup or drop-off landmark.")]
    Manhattan,
    #[clap(name = "zero", help = "The zero heuristic.")]
    #[serde(rename = "zero")]
    ZeroHeuristic,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Manhattan => Box::new(Manhattan::new()),
            HeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}
