mod astar;
mod bfs;
mod dfs;
mod search_engine;
mod search_statistics;
mod termination_condition;
mod ucs;


pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub(crate) use search_engine::run_search;
pub use search_engine::{SearchEngine, SearchEngineName, SearchError, SearchResult};
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;
pub use ucs::UCS;
