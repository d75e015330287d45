//! The `quizsheet write` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizsheet_core::codec::write_answer_vector;
use quizsheet_core::model::QUESTION_COUNT;
use quizsheet_core::parser::parse_sheet;
use quizsheet_fetch::config::load_config_from;

pub fn execute(
    file: PathBuf,
    index: u32,
    out_dir: PathBuf,
    strategy: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let strategy = super::scan_strategy(strategy.as_deref(), config.scan_strategy)?;

    let answers = parse_sheet(&file, strategy)
        .with_context(|| format!("failed to parse {}", file.display()))?;
    let path = write_answer_vector(&out_dir, index, &answers)?;

    println!(
        "Wrote {} ({}/{QUESTION_COUNT} answered)",
        path.display(),
        answers.answered_count()
    );
    Ok(())
}
