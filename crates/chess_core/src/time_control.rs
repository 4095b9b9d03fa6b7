//! Search limits and cutoffs.
//!
//! The search itself is a fixed-depth recursion. A caller who wants to bound
//! its latency sets a wall-clock budget or a node budget here; when either
//! runs out the search unwinds, undoing every move on the way up, and reports
//! the best root move it finished.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Default lookahead in plies.
pub const DEFAULT_DEPTH: u8 = 5;

#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Search depth in plies (half-moves)
    pub depth: u8,
    /// Maximum time allowed for this move (None = no limit)
    pub move_time: Option<Duration>,
    /// Maximum number of nodes to visit (None = no limit)
    pub node_limit: Option<u64>,
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Create limits with only depth constraint.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            node_limit: None,
            time_control: TimeControl::new(None),
        }
    }

    pub fn with_move_time(mut self, move_time: Duration) -> Self {
        self.move_time = Some(move_time);
        self.time_control = TimeControl::new(Some(move_time));
        self
    }

    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.node_limit = Some(nodes);
        self
    }

    /// Start the clock. Call this when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }

    /// True once any budget is spent. `nodes` is the count visited so far.
    pub fn exhausted(&self, nodes: u64) -> bool {
        if self.node_limit.is_some_and(|limit| nodes >= limit) {
            self.time_control.stop();
            return true;
        }
        if self.time_control.should_check_time(nodes) {
            return self.time_control.check_time();
        }
        self.time_control.is_stopped()
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(DEFAULT_DEPTH)
    }
}

/// Shareable stop flag with an optional wall-clock budget.
///
/// Cloning shares the flag, so a clone handed to another owner can call
/// [`TimeControl::stop`] to cut a running search short.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<Mutex<Option<Instant>>>,
    time_limit: Option<Duration>,
    /// Clock reads happen every `check_interval` nodes.
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(Mutex::new(None)),
            time_limit,
            check_interval: 1024,
        }
    }

    pub fn start(&self) {
        *self
            .start_time
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Reads the clock and raises the stop flag if the budget is spent.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let Some(limit) = self.time_limit
            && self.elapsed() >= limit
        {
            self.stop();
            return true;
        }
        false
    }

    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes.is_multiple_of(self.check_interval)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
