use crate::search::{
    generate_successor,
    search_engines::{SearchEngineName, SearchStatistics, TerminationCondition},
    HeuristicName, Solution, TaxiState,
};

/// Run an engine without resource limits and unwrap the solution.
pub fn solve(
    engine_name: SearchEngineName,
    initial_state: TaxiState,
) -> (Solution, SearchStatistics) {
    let mut engine = engine_name.create(HeuristicName::Manhattan);
    let (result, statistics) = engine.search(initial_state, TerminationCondition::unlimited());
    let solution = result
        .into_solution()
        .unwrap_or_else(|e| panic!("{} failed from {}: {}", engine_name, initial_state, e));
    (solution, statistics)
}

/// Replay a solution on the transition model and check that it ends in the
/// goal, and only there, with the reward the search reported.
pub fn assert_reaches_goal(initial_state: TaxiState, solution: &Solution) {
    let mut state = initial_state;
    let mut total_reward = 0;
    for (i, &action) in solution.plan.iter().enumerate() {
        assert!(!state.is_goal(), "goal reached before step {}", i);
        let successor = generate_successor(&state, action);
        state = successor.state;
        total_reward += successor.reward;
    }
    assert!(state.is_goal(), "plan ends in non-goal state {}", state);
    assert_eq!(total_reward, solution.total_reward);
}
