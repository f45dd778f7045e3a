use tracing::info;

/// Counters threaded through every search invocation.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub time_us: usize,
    pub expanded_nodes: usize,
    pub pruned_states: usize,
    pub memo_hits: usize,
}

impl Stats {
    pub fn print(&self) {
        info!(
            "Time(microseconds) {:?} Expanded nodes {:?} Pruned states {:?} Memo hits {:?}",
            self.time_us, self.expanded_nodes, self.pruned_states, self.memo_hits
        );
    }
}
