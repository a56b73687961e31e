//! Pipeline configuration with environment overrides.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

/// Configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of generation cycles before the run ends.
    pub cycles: u64,
    /// Delay between generation cycles.
    pub cadence: Duration,
    /// Path of the persisted ledger file.
    pub ledger_path: PathBuf,
    /// Seconds before an incomplete pending group is evicted.
    pub group_ttl_secs: u64,
    /// Capacity of each pipeline channel.
    pub channel_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cycles: 60,
            cadence: Duration::from_secs(1),
            ledger_path: PathBuf::from("ledger.json"),
            group_ttl_secs: 30,
            channel_capacity: 64,
        }
    }
}

impl PipelineConfig {
    /// Build a configuration from defaults plus `VC_*` environment overrides.
    ///
    /// Recognized variables: `VC_CYCLES`, `VC_CADENCE_MS`, `VC_LEDGER_PATH`,
    /// `VC_GROUP_TTL_SECS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("VC_CYCLES") {
            match value.parse() {
                Ok(cycles) => config.cycles = cycles,
                Err(_) => warn!(value = %value, "Ignoring unparsable VC_CYCLES"),
            }
        }
        if let Ok(value) = std::env::var("VC_CADENCE_MS") {
            match value.parse() {
                Ok(ms) => config.cadence = Duration::from_millis(ms),
                Err(_) => warn!(value = %value, "Ignoring unparsable VC_CADENCE_MS"),
            }
        }
        if let Ok(value) = std::env::var("VC_LEDGER_PATH") {
            config.ledger_path = PathBuf::from(value);
        }
        if let Ok(value) = std::env::var("VC_GROUP_TTL_SECS") {
            match value.parse() {
                Ok(secs) => config.group_ttl_secs = secs,
                Err(_) => warn!(value = %value, "Ignoring unparsable VC_GROUP_TTL_SECS"),
            }
        }

        config
    }
}
