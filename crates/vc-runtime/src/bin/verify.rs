//! # VitalChain Ledger Audit Binary
//!
//! Loads the persisted ledger fresh from disk, replays the hash chain,
//! prints every inconsistency plus the statistics summary, and exits
//! non-zero if the chain is corrupt. The summary is also written to a
//! report file next to the findings on stdout.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use vc_ledger::{FileLedgerStore, LedgerStore};
use vc_verifier::{render_summary, verify_chain};

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let ledger_path = std::env::var("VC_LEDGER_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("ledger.json"));
    let report_path = std::env::var("VC_REPORT_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("report.txt"));

    let store = FileLedgerStore::open(&ledger_path)
        .with_context(|| format!("Failed to open ledger at {}", ledger_path.display()))?;
    let chain = store.load().context("Failed to load persisted chain")?;

    println!("LEDGER VERIFICATION");
    println!("{}", "=".repeat(40));

    let report = verify_chain(&chain);
    print!("{}", report.render());

    let summary = render_summary(&chain);
    print!("{summary}");
    std::fs::write(&report_path, &summary)
        .with_context(|| format!("Failed to write report to {}", report_path.display()))?;

    println!("{}", "=".repeat(40));
    if report.passed() {
        println!("Ledger verification completed successfully");
        Ok(())
    } else {
        bail!("Ledger verification completed with errors");
    }
}
