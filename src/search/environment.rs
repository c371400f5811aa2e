//! The stepping interface of a taxi simulator, and [`TaxiEnvironment`], an
//! implementation backed by the transition model. External simulators plug
//! in by implementing [`Environment`]; plans and masks are then checked
//! against them with [`validate`](crate::search::validate).

use crate::search::{
    action_mask, generate_successor, Action, ActionMask, EncodedState, Reward, TaxiState,
};
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt::Debug;
use tracing::trace;

/// What the simulator reports after one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub next_state: EncodedState,
    pub reward: Reward,
    /// Whether the passenger has been delivered
    pub done: bool,
    /// Legal actions in `next_state`
    pub action_mask: ActionMask,
}

pub trait Environment: Debug {
    /// Start a new episode. The same seed always yields the same initial
    /// state.
    fn reset(&mut self, seed: u64) -> EncodedState;

    /// Execute an action in the current episode.
    fn step(&mut self, action: Action) -> Step;
}

#[derive(Debug, Clone)]
pub struct TaxiEnvironment {
    state: TaxiState,
    fixed_start: Option<TaxiState>,
}

impl Default for TaxiEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl TaxiEnvironment {
    /// An environment whose episodes start in a state drawn from the seed:
    /// the passenger waits at a landmark, the destination is a different
    /// landmark and the taxi can be anywhere.
    pub fn new() -> Self {
        Self {
            state: initial_state_for_seed(0),
            fixed_start: None,
        }
    }

    /// An environment whose episodes always start in `state`.
    pub fn with_initial_state(state: TaxiState) -> Self {
        Self {
            state,
            fixed_start: Some(state),
        }
    }

    pub fn state(&self) -> TaxiState {
        self.state
    }
}

/// The start distribution of the reference simulator: uniform over states
/// with the passenger at a landmark other than the destination.
pub fn initial_states() -> Vec<TaxiState> {
    TaxiState::all()
        .filter(|state| !state.passenger_in_taxi() && !state.is_goal())
        .collect()
}

pub fn initial_state_for_seed(seed: u64) -> TaxiState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let candidates = initial_states();
    // The candidate list is never empty.
    candidates
        .choose(&mut rng)
        .copied()
        .unwrap_or(candidates[0])
}

impl Environment for TaxiEnvironment {
    fn reset(&mut self, seed: u64) -> EncodedState {
        self.state = self
            .fixed_start
            .unwrap_or_else(|| initial_state_for_seed(seed));
        trace!(seed, state = %self.state, "reset");
        self.state.encode()
    }

    fn step(&mut self, action: Action) -> Step {
        let successor = generate_successor(&self.state, action);
        self.state = successor.state;
        Step {
            next_state: self.state.encode(),
            reward: successor.reward,
            done: self.state.is_goal(),
            action_mask: action_mask(&self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_distribution() {
        let states = initial_states();
        assert_eq!(states.len(), 300);
        assert!(states
            .iter()
            .all(|state| state.passenger_location < 4 && state.passenger_location != state.destination));
    }

    #[test]
    fn reset_is_reproducible() {
        let mut env = TaxiEnvironment::new();
        for seed in 0..20 {
            let first = env.reset(seed);
            let second = env.reset(seed);
            assert_eq!(first, second);
            let state = TaxiState::decode(first).unwrap();
            assert!(!state.is_goal());
            assert!(!state.passenger_in_taxi());
        }
    }

    #[test]
    fn fixed_start_ignores_seed() {
        let start = TaxiState::new(0, 0, 1, 0).unwrap();
        let mut env = TaxiEnvironment::with_initial_state(start);
        assert_eq!(env.reset(3), 4);
        assert_eq!(env.reset(99), 4);
    }

    #[test]
    fn step_reports_done_on_delivery() {
        let start = TaxiState::new(3, 3, 4, 3).unwrap();
        let mut env = TaxiEnvironment::with_initial_state(start);
        env.reset(0);
        let step = env.step(Action::DropOff);
        assert_eq!(step.reward, -10);
        assert!(!step.done);
        let step = env.step(Action::Down);
        assert_eq!(step.reward, -1);
        assert!(!step.done);
        assert!(step.action_mask.is_legal(Action::DropOff));
        let step = env.step(Action::DropOff);
        assert_eq!(step.reward, 20);
        assert!(step.done);
        assert_eq!(env.state(), TaxiState::new(3, 4, 3, 3).unwrap());
    }
}
