use crate::search::search_engines::{SearchResult, SearchStatistics};
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Resource bounds of a search run. Exceeding any of them ends the run with
/// the matching [`SearchResult`] instead of a solution.
#[derive(Debug)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
    max_expansions: Option<i64>,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl Default for TerminationCondition {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl TerminationCondition {
    pub fn new(
        time_limit: Option<Duration>,
        memory_limit_mb: Option<usize>,
        max_expansions: Option<i64>,
    ) -> Self {
        info!(
            time_limit = time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = memory_limit_mb,
            max_expansions = max_expansions,
        );
        Self {
            time_limit,
            memory_limit_mb,
            max_expansions,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn unlimited() -> Self {
        Self::new(None, None, None)
    }

    pub fn with_max_expansions(max_expansions: i64) -> Self {
        Self::new(None, None, Some(max_expansions))
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&mut self) {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        let time_elapsed = self.start_time.elapsed();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = time_elapsed.as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        let time_elapsed = self.start_time.elapsed();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = time_elapsed.as_secs_f64(),
        );
    }

    /// Check the time and memory limits. Memory is sampled on every call
    /// while a memory limit is set.
    pub fn should_terminate(&mut self) -> Option<SearchResult> {
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
            self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    return Some(SearchResult::MemoryLimitExceeded);
                }
            }
        }
        None
    }

    /// Whether another expansion would exceed the expansion limit.
    pub fn expansion_limit_reached(&self, statistics: &SearchStatistics) -> bool {
        self.max_expansions
            .is_some_and(|max_expansions| statistics.expanded_nodes() >= max_expansions)
    }
}
