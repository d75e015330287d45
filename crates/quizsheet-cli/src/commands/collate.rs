//! The `quizsheet collate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizsheet_core::collate::collate_with;
use quizsheet_core::model::{CollatedDataset, QUESTION_COUNT};
use quizsheet_fetch::config::load_config_from;

pub fn execute(
    dir: Option<PathBuf>,
    sort: Option<String>,
    strategy: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let mut options = config.collate_options();
    if let Some(s) = &sort {
        options.sort_order = s.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?;
    }
    options.scan_strategy = super::scan_strategy(strategy.as_deref(), options.scan_strategy)?;

    let dir = dir.unwrap_or(config.data_dir);
    tracing::debug!(?options, "collating {}", dir.display());
    let dataset = collate_with(&dir, &options)?;

    print_summary(&dataset);
    println!(
        "Collated {} respondent(s) into {}",
        dataset.len(),
        dataset.output_path.display()
    );
    Ok(())
}

fn print_summary(dataset: &CollatedDataset) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Respondent", "File", "Answered", "Unanswered"]);

    for entry in &dataset.entries {
        let answered = entry.answers.answered_count();
        table.add_row(vec![
            Cell::new(entry.index),
            Cell::new(&entry.file_name),
            Cell::new(answered),
            Cell::new(QUESTION_COUNT - answered),
        ]);
    }

    println!("{table}");
}
