pub mod collate;
pub mod fetch;
pub mod init;
pub mod parse;
pub mod write;

use anyhow::Result;

use quizsheet_core::model::ScanStrategy;

/// Resolve a `--strategy` flag against the configured default.
pub(crate) fn scan_strategy(flag: Option<&str>, configured: ScanStrategy) -> Result<ScanStrategy> {
    match flag {
        Some(s) => s.parse().map_err(|e: String| anyhow::anyhow!("{}", e)),
        None => Ok(configured),
    }
}
