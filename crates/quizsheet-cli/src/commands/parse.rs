//! The `quizsheet parse` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizsheet_core::codec::encode;
use quizsheet_core::parser::parse_sheet;
use quizsheet_fetch::config::load_config_from;

pub fn execute(
    file: PathBuf,
    format: String,
    strategy: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let strategy = super::scan_strategy(strategy.as_deref(), config.scan_strategy)?;

    let answers = parse_sheet(&file, strategy)
        .with_context(|| format!("failed to parse {}", file.display()))?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string(&answers)?),
        "text" => println!("{}", encode(answers.as_slice())?),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}
