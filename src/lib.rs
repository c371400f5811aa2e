//! Uninformed and informed search (BFS, DFS, UCS and A*) over the taxi
//! puzzle: a taxi on a 5x5 grid with walls has to pick up a passenger at one
//! landmark and drop them off at another. Rewards and action masks follow the
//! reference simulator exactly, so found plans can be replayed in it.

#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

// Crate dependencies used in binary but not in library. Unfortunately cargo
// does not yet allow specifying dependencies for binaries only.
use serde_json as _;
use tracing_subscriber as _;

pub mod search;

#[cfg(test)]
mod test_utils;
