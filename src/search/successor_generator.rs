//! The deterministic transition model of the taxi puzzle. The mask and the
//! rewards reproduce the reference simulator exactly, including the asymmetry
//! between bumping into a wall (the ordinary step penalty) and an illegal
//! pickup or drop-off (a larger penalty).

use crate::search::{
    layout::{self, LANDMARKS},
    Action, TaxiState, IN_TAXI,
};
use serde::{Deserialize, Serialize};
use std::ops::Index;
use strum::{EnumCount, IntoEnumIterator};

pub type Reward = i64;

/// Search cost of a transition, the negated reward.
pub type Cost = i64;

pub const STEP_REWARD: Reward = -1;
pub const ILLEGAL_ACTION_REWARD: Reward = -10;
pub const DELIVERY_REWARD: Reward = 20;

/// Legality of each action in a state, indexed by [`Action::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionMask([bool; Action::COUNT]);

impl ActionMask {
    pub fn new(mask: [bool; Action::COUNT]) -> Self {
        Self(mask)
    }

    pub fn is_legal(&self, action: Action) -> bool {
        self.0[action.index()]
    }

    pub fn legal_actions(&self) -> impl Iterator<Item = Action> + '_ {
        Action::iter().filter(|&action| self.is_legal(action))
    }

    pub fn as_array(&self) -> [bool; Action::COUNT] {
        self.0
    }
}

impl Index<Action> for ActionMask {
    type Output = bool;

    fn index(&self, action: Action) -> &Self::Output {
        &self.0[action.index()]
    }
}

/// The outcome of applying one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor {
    pub state: TaxiState,
    pub reward: Reward,
}

impl Successor {
    pub fn cost(&self) -> Cost {
        -self.reward
    }
}

pub fn action_mask(state: &TaxiState) -> ActionMask {
    let (col, row) = state.taxi_position();
    let at_passenger = !state.passenger_in_taxi()
        && LANDMARKS[state.passenger_location as usize] == (col, row);
    let at_landmark = layout::landmark_at(col, row).is_some();

    ActionMask([
        layout::can_move_south(row),
        layout::can_move_north(row),
        layout::can_move_east(col, row),
        layout::can_move_west(col, row),
        at_passenger,
        state.passenger_in_taxi() && at_landmark,
    ])
}

pub fn is_legal(state: &TaxiState, action: Action) -> bool {
    action_mask(state).is_legal(action)
}

pub fn generate_successor(state: &TaxiState, action: Action) -> Successor {
    let mut next = *state;

    if !is_legal(state, action) {
        let reward = if action.is_movement() {
            STEP_REWARD
        } else {
            ILLEGAL_ACTION_REWARD
        };
        return Successor {
            state: next,
            reward,
        };
    }

    let reward = match action {
        Action::Down => {
            next.taxi_row += 1;
            STEP_REWARD
        }
        Action::Up => {
            next.taxi_row -= 1;
            STEP_REWARD
        }
        Action::Right => {
            next.taxi_col += 1;
            STEP_REWARD
        }
        Action::Left => {
            next.taxi_col -= 1;
            STEP_REWARD
        }
        Action::PickUp => {
            next.passenger_location = IN_TAXI;
            STEP_REWARD
        }
        Action::DropOff => {
            // Legality guarantees the taxi is on a landmark.
            next.passenger_location = layout::landmark_at(next.taxi_col, next.taxi_row)
                .unwrap_or(next.passenger_location);
            DELIVERY_REWARD
        }
    };

    Successor {
        state: next,
        reward,
    }
}

/// All six successors of a state, in action order.
pub fn generate_successors(state: &TaxiState) -> impl Iterator<Item = (Action, Successor)> + '_ {
    Action::iter().map(move |action| (action, generate_successor(state, action)))
}
