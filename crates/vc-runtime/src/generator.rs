//! Random vitals generator.
//!
//! An external producer from the pipeline's point of view: emits one raw
//! reading per generation cycle within the expected physiological
//! domains. Timestamps advance one second per cycle from the base
//! instant, matching the one-cycle-per-second reference cadence and
//! staying unique even when a test drives cycles faster than wall time.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::VitalsReading;

/// Timestamp rendering used as the join key across the pipeline.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Produces one random `VitalsReading` per cycle.
pub struct VitalsGenerator {
    rng: StdRng,
    base: DateTime<Utc>,
}

impl VitalsGenerator {
    /// Create a generator starting at the current instant.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            base: Utc::now(),
        }
    }

    /// Create a deterministic generator for tests.
    pub fn seeded(seed: u64, base: DateTime<Utc>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            base,
        }
    }

    /// Generate the reading for generation cycle `cycle`.
    pub fn reading(&mut self, cycle: u64) -> VitalsReading {
        let instant = self.base + Duration::seconds(cycle as i64);
        VitalsReading {
            timestamp: instant.format(TIMESTAMP_FORMAT).to_string(),
            frequency: f64::from(self.rng.gen_range(60..=180)),
            pressure: [
                f64::from(self.rng.gen_range(110..=180)),
                f64::from(self.rng.gen_range(70..=110)),
            ],
            oxygen: f64::from(self.rng.gen_range(90..=100)),
        }
    }
}

impl Default for VitalsGenerator {
    fn default() -> Self {
        Self::new()
    }
}
