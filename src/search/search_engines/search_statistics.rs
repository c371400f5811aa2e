use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// Counters collected during one search run. They are observational only and
/// never influence the order of expansion.
#[derive(Debug, Clone, Serialize)]
pub struct SearchStatistics {
    /// Number of nodes expanded, i.e. popped with a state not explored before
    expanded_nodes: i64,
    /// Number of nodes popped from the frontier, including the goal node
    popped_nodes: i64,
    /// Number of child nodes generated, six per expansion
    generated_nodes: i64,
    /// Number of generated nodes pushed onto the frontier
    pushed_nodes: i64,
    /// Frontier size right before each pop, one entry per pop
    frontier_sizes: Vec<usize>,
    /// Time when the search started
    #[serde(skip)]
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    #[serde(skip)]
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            popped_nodes: 0,
            generated_nodes: 0,
            pushed_nodes: 0,
            frontier_sizes: Vec::new(),
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    /// Record a pop from a frontier that held `frontier_size` nodes.
    pub fn register_pop(&mut self, frontier_size: usize) {
        self.popped_nodes += 1;
        self.frontier_sizes.push(frontier_size);
        self.log_if_needed();
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as i64;
        self.log_if_needed();
    }

    pub fn increment_pushed_nodes(&mut self) {
        self.pushed_nodes += 1;
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn popped_nodes(&self) -> i64 {
        self.popped_nodes
    }

    pub fn generated_nodes(&self) -> i64 {
        self.generated_nodes
    }

    pub fn pushed_nodes(&self) -> i64 {
        self.pushed_nodes
    }

    pub fn frontier_sizes(&self) -> &[usize] {
        &self.frontier_sizes
    }

    pub fn max_frontier_size(&self) -> usize {
        self.frontier_sizes.iter().copied().max().unwrap_or(0)
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.search_start_time.elapsed().as_secs_f64()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            popped_nodes = self.popped_nodes,
            generated_nodes = self.generated_nodes,
            pushed_nodes = self.pushed_nodes,
            max_frontier_size = self.max_frontier_size(),
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.elapsed_secs());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters() {
        let mut statistics = SearchStatistics::new();
        statistics.register_pop(1);
        statistics.increment_expanded_nodes();
        statistics.increment_generated_nodes(6);
        statistics.increment_pushed_nodes();
        statistics.increment_pushed_nodes();
        statistics.register_pop(2);

        assert_eq!(statistics.popped_nodes(), 2);
        assert_eq!(statistics.expanded_nodes(), 1);
        assert_eq!(statistics.generated_nodes(), 6);
        assert_eq!(statistics.pushed_nodes(), 2);
        assert_eq!(statistics.frontier_sizes(), &[1, 2]);
        assert_eq!(statistics.max_frontier_size(), 2);
    }
}
