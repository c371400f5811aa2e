//! Breadth first search

use crate::search::{
    frontier::FifoFrontier,
    search_engines::{run_search, SearchEngine, SearchResult, SearchStatistics, TerminationCondition},
    TaxiState, ZeroHeuristic,
};

#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for BFS {
    fn search(
        &mut self,
        initial_state: TaxiState,
        termination_condition: TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut frontier = FifoFrontier::new();
        run_search(
            initial_state,
            &mut frontier,
            &ZeroHeuristic::new(),
            termination_condition,
        )
    }
}
