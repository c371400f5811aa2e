mod action;
mod environment;
pub mod frontier;
pub mod heuristics;
pub mod layout;
mod plan;
mod search_config;
pub mod search_engines;
mod search_node;
mod search_space;
mod state;
mod successor_generator;
mod validate;
mod verbosity;

pub use action::Action;
pub use environment::{initial_state_for_seed, initial_states, Environment, Step, TaxiEnvironment};
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue, Manhattan, ZeroHeuristic};
pub use plan::{Plan, PlanError, Solution};
pub use search_config::{ConfigError, SearchConfig};
pub use search_node::{NodeId, SearchNode, NO_NODE};
pub use search_space::SearchSpace;
pub use state::{EncodedState, StateError, TaxiState, IN_TAXI, NUM_STATES};
pub use successor_generator::{
    action_mask, generate_successor, generate_successors, is_legal, ActionMask, Cost, Reward,
    Successor, DELIVERY_REWARD, ILLEGAL_ACTION_REWARD, STEP_REWARD,
};
pub use validate::{validate, validate_transitions, ValidationError};
pub use verbosity::Verbosity;
