//! Read-only analytics over the ledger payload.
//!
//! Produces the statistics summary the audit run prints next to the
//! integrity findings. Operates purely on the block payloads and takes
//! no part in the integrity check.

use shared_types::LedgerBlock;

/// Aggregate statistics over a chain's payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainSummary {
    /// Total blocks in the chain.
    pub total_blocks: usize,
    /// Blocks whose alert flag is set.
    pub alert_blocks: usize,
    /// Mean of the per-block frequency means.
    pub avg_frequency: f64,
    /// Mean of the per-block systolic means.
    pub avg_systolic: f64,
    /// Mean of the per-block diastolic means.
    pub avg_diastolic: f64,
    /// Mean of the per-block oxygen means.
    pub avg_oxygen: f64,
}

impl ChainSummary {
    /// Summarize a chain's payload. `None` for an empty chain, so the
    /// caller renders an informative message instead of dividing by zero.
    pub fn from_chain(chain: &[LedgerBlock]) -> Option<Self> {
        if chain.is_empty() {
            return None;
        }
        let n = chain.len() as f64;
        let alert_blocks = chain.iter().filter(|b| b.alert).count();
        Some(Self {
            total_blocks: chain.len(),
            alert_blocks,
            avg_frequency: chain.iter().map(|b| b.data.frequency.mean).sum::<f64>() / n,
            avg_systolic: chain.iter().map(|b| b.data.pressure.mean[0]).sum::<f64>() / n,
            avg_diastolic: chain.iter().map(|b| b.data.pressure.mean[1]).sum::<f64>() / n,
            avg_oxygen: chain.iter().map(|b| b.data.oxygen.mean).sum::<f64>() / n,
        })
    }

    /// Percentage of blocks carrying an alert.
    pub fn alert_percentage(&self) -> f64 {
        if self.total_blocks == 0 {
            return 0.0;
        }
        self.alert_blocks as f64 / self.total_blocks as f64 * 100.0
    }

    /// Render the summary as the human-readable analysis report.
    pub fn render(&self) -> String {
        format!(
            "LEDGER ANALYSIS REPORT\n\
             {divider}\n\
             \n\
             SUMMARY:\n\
             - Total blocks: {total}\n\
             - Blocks with alerts: {alerts}\n\
             - Alert percentage: {pct:.1}%\n\
             \n\
             ANALYSIS:\n\
             - Normal frequency range: 60-100 bpm (Current: {freq:.1})\n\
             - Normal systolic range: 90-140 mmHg (Current: {sys:.1})\n\
             - Normal diastolic range: 60-90 mmHg (Current: {dia:.1})\n\
             - Normal oxygen range: 95-100% (Current: {oxy:.1})\n",
            divider = "=".repeat(50),
            total = self.total_blocks,
            alerts = self.alert_blocks,
            pct = self.alert_percentage(),
            freq = self.avg_frequency,
            sys = self.avg_systolic,
            dia = self.avg_diastolic,
            oxy = self.avg_oxygen,
        )
    }
}

/// Render the analysis report for a chain, empty chains included.
pub fn render_summary(chain: &[LedgerBlock]) -> String {
    match ChainSummary::from_chain(chain) {
        Some(summary) => summary.render(),
        None => "No blocks to analyze\n".to_string(),
    }
}
