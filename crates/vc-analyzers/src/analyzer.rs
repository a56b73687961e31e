//! The three metric analyzers.
//!
//! Each analyzer owns its window(s) exclusively; the pipeline runs one
//! task per analyzer so no locking is needed. Garbage values are
//! summarized as-is, physical plausibility is not this layer's concern.

use shared_types::{MetricKind, MetricStats, MetricSummary, PressureStats, VitalsReading};

use crate::window::{RollingWindow, DEFAULT_WINDOW_SIZE};

/// A stat aggregator for one metric.
///
/// `update` appends the relevant component(s) of the reading to the
/// rolling window and returns a summary stamped with the reading's
/// timestamp.
pub trait VitalsAnalyzer: Send {
    /// The metric this analyzer owns.
    fn kind(&self) -> MetricKind;

    /// Fold one reading into the window and emit the cycle's summary.
    fn update(&mut self, reading: &VitalsReading) -> MetricSummary;
}

/// Heart-frequency analyzer.
#[derive(Debug, Default)]
pub struct FrequencyAnalyzer {
    window: RollingWindow,
}

impl FrequencyAnalyzer {
    /// Create an analyzer with the default window size.
    pub fn new() -> Self {
        Self::default()
    }
}

impl VitalsAnalyzer for FrequencyAnalyzer {
    fn kind(&self) -> MetricKind {
        MetricKind::Frequency
    }

    fn update(&mut self, reading: &VitalsReading) -> MetricSummary {
        self.window.push(reading.frequency);
        MetricSummary::Frequency {
            timestamp: reading.timestamp.clone(),
            stats: MetricStats {
                mean: self.window.mean(),
                std_dev: self.window.std_dev(),
            },
        }
    }
}

/// Blood-pressure analyzer.
///
/// Keeps two parallel windows (systolic, diastolic) that evolve in
/// lockstep: every reading pushes into both, so both components always
/// cover the same cycles.
#[derive(Debug)]
pub struct PressureAnalyzer {
    systolic: RollingWindow,
    diastolic: RollingWindow,
}

impl PressureAnalyzer {
    /// Create an analyzer with the default window size.
    pub fn new() -> Self {
        Self {
            systolic: RollingWindow::new(DEFAULT_WINDOW_SIZE),
            diastolic: RollingWindow::new(DEFAULT_WINDOW_SIZE),
        }
    }
}

impl Default for PressureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl VitalsAnalyzer for PressureAnalyzer {
    fn kind(&self) -> MetricKind {
        MetricKind::Pressure
    }

    fn update(&mut self, reading: &VitalsReading) -> MetricSummary {
        let [systolic, diastolic] = reading.pressure;
        self.systolic.push(systolic);
        self.diastolic.push(diastolic);
        MetricSummary::Pressure {
            timestamp: reading.timestamp.clone(),
            stats: PressureStats {
                mean: [self.systolic.mean(), self.diastolic.mean()],
                std_dev: [self.systolic.std_dev(), self.diastolic.std_dev()],
            },
        }
    }
}

/// Oxygen-saturation analyzer.
#[derive(Debug, Default)]
pub struct OxygenAnalyzer {
    window: RollingWindow,
}

impl OxygenAnalyzer {
    /// Create an analyzer with the default window size.
    pub fn new() -> Self {
        Self::default()
    }
}

impl VitalsAnalyzer for OxygenAnalyzer {
    fn kind(&self) -> MetricKind {
        MetricKind::Oxygen
    }

    fn update(&mut self, reading: &VitalsReading) -> MetricSummary {
        self.window.push(reading.oxygen);
        MetricSummary::Oxygen {
            timestamp: reading.timestamp.clone(),
            stats: MetricStats {
                mean: self.window.mean(),
                std_dev: self.window.std_dev(),
            },
        }
    }
}
