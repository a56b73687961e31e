//! Bounded FIFO window over recent readings.
//!
//! Belongs in the domain layer (no I/O). Statistics are computed over
//! whatever the window currently holds, so a freshly started analyzer
//! reports over fewer than `capacity` samples until the window fills.

use std::collections::VecDeque;

/// Number of recent readings each analyzer keeps.
pub const DEFAULT_WINDOW_SIZE: usize = 30;

/// A bounded FIFO buffer of the most recent readings for one component.
///
/// Pushing beyond capacity evicts the oldest entry first.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    values: VecDeque<f64>,
    capacity: usize,
}

impl RollingWindow {
    /// Create a window holding at most `capacity` readings.
    pub fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a reading, evicting the oldest if the window is full.
    pub fn push(&mut self, value: f64) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// Number of readings currently held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the window holds no readings.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arithmetic mean of the window.
    ///
    /// Callers push before computing, so the window is never empty here;
    /// an empty window still returns 0.0 rather than NaN.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Population standard deviation of the window (divisor N).
    ///
    /// A window of one reading has a standard deviation of 0.
    pub fn std_dev(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .values
            .iter()
            .map(|x| (x - mean).powi(2))
            .sum::<f64>()
            / self.values.len() as f64;
        variance.sqrt()
    }

    /// Snapshot of the current contents, oldest first.
    pub fn values(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}
