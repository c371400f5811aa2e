use crate::search::{
    frontier::Frontier,
    search_engines::{AStar, SearchStatistics, TerminationCondition, BFS, DFS, UCS},
    Heuristic, HeuristicName, SearchSpace, Solution, TaxiState,
};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display, Formatter};
use thiserror::Error;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search was successful
    Success(Solution),
    /// The frontier ran empty without reaching a goal
    ProvablyUnsolvable,
    /// The search engine hit the expansion limit
    ExpansionLimitReached,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine ran out of memory
    MemoryLimitExceeded,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no solution exists from the initial state")]
    NoSolution,
    #[error("expansion limit reached before a solution was found")]
    ExpansionLimitReached,
    #[error("time limit exceeded before a solution was found")]
    TimeLimitExceeded,
    #[error("memory limit exceeded before a solution was found")]
    MemoryLimitExceeded,
}

impl SearchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    /// Short kebab-case name of the outcome, without the solution.
    pub fn name(&self) -> &'static str {
        match self {
            SearchResult::Success(_) => "success",
            SearchResult::ProvablyUnsolvable => "provably-unsolvable",
            SearchResult::ExpansionLimitReached => "expansion-limit-reached",
            SearchResult::TimeLimitExceeded => "time-limit-exceeded",
            SearchResult::MemoryLimitExceeded => "memory-limit-exceeded",
        }
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchResult::Success(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Result<Solution, SearchError> {
        match self {
            SearchResult::Success(solution) => Ok(solution),
            SearchResult::ProvablyUnsolvable => Err(SearchError::NoSolution),
            SearchResult::ExpansionLimitReached => Err(SearchError::ExpansionLimitReached),
            SearchResult::TimeLimitExceeded => Err(SearchError::TimeLimitExceeded),
            SearchResult::MemoryLimitExceeded => Err(SearchError::MemoryLimitExceeded),
        }
    }
}

pub trait SearchEngine: Debug {
    fn search(
        &mut self,
        initial_state: TaxiState,
        termination_condition: TerminationCondition,
    ) -> (SearchResult, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "A* search, ordered by path cost plus heuristic estimate.")]
    Astar,
    #[clap(help = "Uniform-cost search, ordered by path cost.")]
    Ucs,
    #[clap(help = "Depth-first search. Returns the first solution found.")]
    Dfs,
    #[clap(help = "Breadth-first search.")]
    Bfs,
}

impl SearchEngineName {
    /// Every engine, in the order they are compared.
    pub const ALL: [SearchEngineName; 4] = [
        SearchEngineName::Astar,
        SearchEngineName::Ucs,
        SearchEngineName::Dfs,
        SearchEngineName::Bfs,
    ];

    /// Create the engine. Only A* consults the heuristic, the others search
    /// with the zero heuristic.
    pub fn create(&self, heuristic_name: HeuristicName) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::Astar => Box::new(AStar::new(heuristic_name.create())),
            SearchEngineName::Ucs => Box::new(UCS::new()),
            SearchEngineName::Dfs => Box::new(DFS::new()),
            SearchEngineName::Bfs => Box::new(BFS::new()),
        }
    }
}

impl Display for SearchEngineName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchEngineName::Astar => "A*",
            SearchEngineName::Ucs => "UCS",
            SearchEngineName::Dfs => "DFS",
            SearchEngineName::Bfs => "BFS",
        };
        f.write_str(name)
    }
}

/// The expansion loop shared by every engine; the engines differ only in the
/// frontier and heuristic they pass in.
///
/// The goal test happens when a node is popped. A popped node whose state has
/// already been explored is not expanded again. Children are pushed unless
/// their state has been explored, so the same state may sit in the frontier
/// more than once. The expansion limit is checked only when a node is about
/// to be expanded, so a goal popped within the budget is always returned.
pub(crate) fn run_search(
    initial_state: TaxiState,
    frontier: &mut dyn Frontier,
    heuristic: &dyn Heuristic,
    mut termination_condition: TerminationCondition,
) -> (SearchResult, SearchStatistics) {
    debug!(initial_state = %initial_state, heuristic = ?heuristic);
    let mut statistics = SearchStatistics::new();
    let mut search_space = SearchSpace::new(initial_state, heuristic);
    frontier.push(search_space.get_root_node());

    let result = loop {
        if let Some(result) = termination_condition.should_terminate() {
            info!("terminating search: {}", result.name());
            break result;
        }
        termination_condition.log_if_needed();

        if frontier.is_empty() {
            info!("frontier exhausted without reaching the goal");
            break SearchResult::ProvablyUnsolvable;
        }
        statistics.register_pop(frontier.len());
        let Some(node_id) = frontier.pop() else {
            break SearchResult::ProvablyUnsolvable;
        };

        let node = search_space.get_node(node_id);
        trace!(node = node_id.index(), state = %node.get_state(), f = node.get_f());
        if node.reached_goal() {
            break SearchResult::Success(search_space.extract_solution(node_id));
        }

        let state = *node.get_state();
        if search_space.is_explored(&state) {
            continue;
        }
        if termination_condition.expansion_limit_reached(&statistics) {
            info!("terminating search: expansion limit reached");
            break SearchResult::ExpansionLimitReached;
        }
        search_space.mark_explored(state);
        statistics.increment_expanded_nodes();

        let children = search_space.expand(node_id, heuristic);
        statistics.increment_generated_nodes(children.len());
        for child_id in children {
            let child = search_space.get_node(child_id);
            if !search_space.is_explored(child.get_state()) {
                frontier.push(child);
                statistics.increment_pushed_nodes();
            }
        }
    };

    statistics.finalise_search();
    termination_condition.finalise();
    (result, statistics)
}
