//! A* search: best-first by path cost plus heuristic estimate.

use crate::search::{
    frontier::PriorityFrontier,
    search_engines::{run_search, SearchEngine, SearchResult, SearchStatistics, TerminationCondition},
    Heuristic, Manhattan, TaxiState,
};

#[derive(Debug)]
pub struct AStar {
    heuristic: Box<dyn Heuristic>,
}

impl Default for AStar {
    fn default() -> Self {
        Self::new(Box::new(Manhattan::new()))
    }
}

impl AStar {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Self { heuristic }
    }
}

impl SearchEngine for AStar {
    fn search(
        &mut self,
        initial_state: TaxiState,
        termination_condition: TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut frontier = PriorityFrontier::new();
        run_search(
            initial_state,
            &mut frontier,
            self.heuristic.as_ref(),
            termination_condition,
        )
    }
}
