//! Retrieval of a remote answer sheet into a local respondent file.

use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::error::{Result, SheetError};
use crate::naming::{respondent_file_name, FilePurpose};
use crate::traits::ContentFetcher;

/// Fetch `source` and save it as `answers_respondent_{index}.txt` inside
/// `destination_dir`, creating the directory if needed.
///
/// The source is validated before the directory is created, so a rejected
/// link leaves the filesystem untouched.
#[instrument(skip(fetcher, source), fields(fetcher = fetcher.name()))]
pub async fn retrieve(
    fetcher: &dyn ContentFetcher,
    source: &str,
    destination_dir: &Path,
    index: u32,
) -> Result<PathBuf> {
    if index < 1 {
        return Err(SheetError::InvalidInput(
            "respondent index must be a positive integer".into(),
        ));
    }
    fetcher.validate(source)?;

    if !destination_dir.is_dir() {
        tokio::fs::create_dir_all(destination_dir)
            .await
            .map_err(|e| {
                SheetError::io(
                    format!(
                        "failed to create destination folder {}",
                        destination_dir.display()
                    ),
                    e,
                )
            })?;
    }

    let bytes = fetcher.fetch(source).await?;

    let path = destination_dir.join(respondent_file_name(index, FilePurpose::Sheet));
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| SheetError::write(&path, e))?;

    if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
        return Err(SheetError::NotFound(format!(
            "file {} was not created after download",
            path.display()
        )));
    }

    tracing::info!(
        index,
        bytes = bytes.len(),
        path = %path.display(),
        "retrieved respondent file"
    );
    Ok(path)
}
