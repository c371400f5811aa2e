use crate::search::{Heuristic, HeuristicValue, TaxiState};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&self, _state: &TaxiState) -> HeuristicValue {
        0
    }
}
