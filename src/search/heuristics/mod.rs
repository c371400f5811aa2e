mod heuristic;
mod manhattan;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan::Manhattan;
pub use zero_heuristic::ZeroHeuristic;
