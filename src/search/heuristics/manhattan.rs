//! Manhattan distance to the next sub-goal: the passenger's landmark while the
//! passenger is waiting, the destination landmark once they are on board.
//! Every unit of distance needs at least one movement action of cost one, so
//! the estimate never exceeds the number of remaining steps.

use crate::search::{
    layout::{manhattan_distance, LANDMARKS},
    Heuristic, HeuristicValue, TaxiState,
};

#[derive(Clone, Debug, Default)]
pub struct Manhattan {}

impl Manhattan {
    pub fn new() -> Self {
        Manhattan {}
    }
}

impl Heuristic for Manhattan {
    fn evaluate(&self, state: &TaxiState) -> HeuristicValue {
        let target = if state.passenger_in_taxi() {
            LANDMARKS[state.destination as usize]
        } else if !state.is_goal() {
            LANDMARKS[state.passenger_location as usize]
        } else {
            return 0;
        };
        HeuristicValue::from(manhattan_distance(state.taxi_position(), target))
    }
}
