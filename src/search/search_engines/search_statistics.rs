use crate::search::HeuristicValue;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes popped from the frontier and expanded, not counting
    /// the goal node that ends the search
    expanded_nodes: usize,
    /// Number of nodes inserted into the frontier, including the root
    generated_nodes: usize,
    /// Number of candidate successors dropped without entering the frontier
    discarded_nodes: usize,
    /// Number of closed states moved back to the frontier
    reopened_nodes: usize,
    /// Number of pending nodes replaced by a cheaper node for the same state
    replaced_nodes: usize,
    /// Highest f-value expanded so far
    max_expanded_f: Option<HeuristicValue>,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        debug!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            discarded_nodes: 0,
            reopened_nodes: 0,
            replaced_nodes: 0,
            max_expanded_f: None,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn register_expanded_f(&mut self, f_value: HeuristicValue) {
        if self.max_expanded_f.map_or(true, |max_f| f_value > max_f) {
            self.max_expanded_f = Some(f_value);
            debug!(f_value = f_value.into_inner(), "new f layer");
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_discarded_nodes(&mut self) {
        self.discarded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_replaced_nodes(&mut self) {
        self.replaced_nodes += 1;
        self.log_if_needed();
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn discarded_nodes(&self) -> usize {
        self.discarded_nodes
    }

    pub fn reopened_nodes(&self) -> usize {
        self.reopened_nodes
    }

    pub fn replaced_nodes(&self) -> usize {
        self.replaced_nodes
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            discarded_nodes = self.discarded_nodes,
            reopened_nodes = self.reopened_nodes,
            replaced_nodes = self.replaced_nodes,
            max_expanded_f = self.max_expanded_f.map(|f| f.into_inner()),
        );
    }

    pub fn finalise_search(&self) {
        debug!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            search_duration = self.search_start_time.elapsed().as_secs_f64(),
            "finalising search"
        );
    }
}
