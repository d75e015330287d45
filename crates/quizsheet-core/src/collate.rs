//! Collation of a directory of respondent sheets into one dataset file.

use std::path::Path;

use crate::codec::{decode, encode};
use crate::error::{Result, SheetError};
use crate::model::{AnswerVector, CollatedDataset, RespondentAnswers, ScanStrategy, SortOrder};
use crate::naming::{has_respondent_shape, respondent_index, FilePurpose, COLLATED_FILE_NAME};
use crate::parser::parse_sheet_unnamed;

/// Options controlling how a directory is collated.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollateOptions {
    pub sort_order: SortOrder,
    pub scan_strategy: ScanStrategy,
}

/// Collate `dir` with default options.
pub fn collate(dir: &Path) -> Result<CollatedDataset> {
    collate_with(dir, &CollateOptions::default())
}

/// Parse every `answers_respondent_{n}.txt` in `dir` and write
/// `collated_answers.txt` next to them.
///
/// Any sheet that fails to parse aborts the whole run before the output file
/// is touched.
pub fn collate_with(dir: &Path, options: &CollateOptions) -> Result<CollatedDataset> {
    if !dir.is_dir() {
        return Err(SheetError::NotFound(format!(
            "folder not found: {}",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    let entries = std::fs::read_dir(dir)
        .map_err(|e| SheetError::io(format!("failed to read directory {}", dir.display()), e))?;
    for entry in entries {
        let entry = entry
            .map_err(|e| SheetError::io(format!("failed to read directory {}", dir.display()), e))?;
        let Ok(name) = entry.file_name().into_string() else {
            tracing::warn!("skipping non UTF-8 entry in {}", dir.display());
            continue;
        };
        match respondent_index(&name, FilePurpose::Sheet) {
            Some(index) if entry.path().is_file() => files.push((index, name)),
            Some(_) => tracing::warn!("skipping {name}: not a regular file"),
            None if has_respondent_shape(&name, FilePurpose::Sheet) => {
                tracing::warn!("skipping {name}: no valid respondent index");
            }
            None => {}
        }
    }

    match options.sort_order {
        SortOrder::Numeric => files.sort(),
        SortOrder::Lexicographic => files.sort_by(|a, b| a.1.cmp(&b.1)),
    }

    if files.is_empty() {
        return Err(SheetError::NotFound(format!(
            "no valid answer files found in {}",
            dir.display()
        )));
    }

    let mut entries = Vec::with_capacity(files.len());
    for (index, file_name) in files {
        let answers = parse_sheet_unnamed(&dir.join(&file_name), options.scan_strategy)
            .map_err(|e| SheetError::Respondent {
                file: file_name.clone(),
                source: Box::new(e),
            })?;
        entries.push(RespondentAnswers {
            index,
            file_name,
            answers,
        });
    }

    let mut out = String::new();
    for entry in &entries {
        out.push_str(&encode(entry.answers.as_slice())?);
        out.push('\n');
    }
    let output_path = dir.join(COLLATED_FILE_NAME);
    std::fs::write(&output_path, out).map_err(|e| SheetError::write(&output_path, e))?;

    tracing::info!(
        respondents = entries.len(),
        sort_order = %options.sort_order,
        output = %output_path.display(),
        "collated answers"
    );

    Ok(CollatedDataset {
        entries,
        output_path,
    })
}

/// Read a collated file back into answer vectors. Blank lines are skipped.
pub fn read_collated(path: &Path) -> Result<Vec<AnswerVector>> {
    let content = std::fs::read_to_string(path).map_err(|e| SheetError::read(path, e))?;
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            decode(line).map_err(|e| match e {
                SheetError::MalformedInput(msg) => {
                    SheetError::MalformedInput(format!("line {}: {msg}", i + 1))
                }
                other => other,
            })
        })
        .collect()
}
