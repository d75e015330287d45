//! The `quizsheet fetch` command.

use std::path::PathBuf;

use anyhow::Result;

use quizsheet_core::retrieval::retrieve;
use quizsheet_fetch::config::load_config_from;
use quizsheet_fetch::create_fetcher;

pub async fn execute(
    link: String,
    index: u32,
    dest: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let dest = dest.unwrap_or(config.data_dir);
    let fetcher = create_fetcher(&config.fetch)?;

    let path = retrieve(fetcher.as_ref(), &link, &dest, index).await?;

    println!("Saved {}", path.display());
    Ok(())
}
