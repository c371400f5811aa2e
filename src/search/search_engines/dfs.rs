//! Depth first search. The first solution found is returned, which is
//! usually not the cheapest.

use crate::search::{
    frontier::LifoFrontier,
    search_engines::{run_search, SearchEngine, SearchResult, SearchStatistics, TerminationCondition},
    TaxiState, ZeroHeuristic,
};

#[derive(Debug, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for DFS {
    fn search(
        &mut self,
        initial_state: TaxiState,
        termination_condition: TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut frontier = LifoFrontier::new();
        run_search(
            initial_state,
            &mut frontier,
            &ZeroHeuristic::new(),
            termination_condition,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn dfs_finds_a_plan() {
        let initial_state = TaxiState::new(0, 0, 1, 0).unwrap();
        let (result, statistics) =
            DFS::new().search(initial_state, TerminationCondition::unlimited());
        let solution = result.into_solution().unwrap();
        assert_eq!(solution.plan.len(), 30);
        assert_eq!(solution.total_reward, -9);
        assert_eq!(statistics.expanded_nodes(), 30);
        assert_eq!(statistics.popped_nodes(), 31);
        assert_reaches_goal(initial_state, &solution);
    }
}
