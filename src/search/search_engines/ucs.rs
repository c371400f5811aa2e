//! Uniform-cost search: best-first by path cost alone.

use crate::search::{
    frontier::PriorityFrontier,
    search_engines::{run_search, SearchEngine, SearchResult, SearchStatistics, TerminationCondition},
    TaxiState, ZeroHeuristic,
};

#[derive(Debug, Default)]
pub struct UCS {}

impl UCS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for UCS {
    fn search(
        &mut self,
        initial_state: TaxiState,
        termination_condition: TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        // With the zero heuristic the f-value of every node is its g-value.
        let mut frontier = PriorityFrontier::new();
        run_search(
            initial_state,
            &mut frontier,
            &ZeroHeuristic::new(),
            termination_condition,
        )
    }
}
