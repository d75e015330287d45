//! Comma-delimited encoding of answer vectors.

use std::path::{Path, PathBuf};

use crate::error::{Result, SheetError};
use crate::model::{check_answers, AnswerVector, QUESTION_COUNT};
use crate::naming::{respondent_file_name, FilePurpose};

const DELIMITER: char = ',';

/// Encode answers as one line of comma-separated integers, with no trailing
/// delimiter or newline.
///
/// Takes a raw slice so callers holding unvalidated values get an
/// invalid-input error instead of a silently short line.
pub fn encode(values: &[u8]) -> Result<String> {
    check_answers(values)?;
    let mut line = String::with_capacity(values.len() * 2);
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        line.push_str(&v.to_string());
    }
    Ok(line)
}

/// Decode one encoded line. Surrounding whitespace is ignored.
pub fn decode(line: &str) -> Result<AnswerVector> {
    let values = line
        .trim()
        .split(DELIMITER)
        .enumerate()
        .map(|(i, token)| {
            token.trim().parse::<u8>().map_err(|_| {
                SheetError::MalformedInput(format!(
                    "token {} is not an answer value: {token:?}",
                    i + 1
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if values.len() != QUESTION_COUNT {
        return Err(SheetError::MalformedInput(format!(
            "expected {QUESTION_COUNT} values, found {}",
            values.len()
        )));
    }
    AnswerVector::try_from(values).map_err(|e| match e {
        SheetError::InvalidInput(msg) => SheetError::MalformedInput(msg),
        other => other,
    })
}

/// Write one respondent's encoded vector to
/// `answers_list_respondent_{index}.txt` inside `dir`.
pub fn write_answer_vector(dir: &Path, index: u32, answers: &AnswerVector) -> Result<PathBuf> {
    if index < 1 {
        return Err(SheetError::InvalidInput(
            "respondent index must be a positive integer".into(),
        ));
    }
    let path = dir.join(respondent_file_name(index, FilePurpose::EncodedList));
    let line = encode(answers.as_slice())?;
    std::fs::write(&path, line).map_err(|e| SheetError::write(&path, e))?;
    tracing::debug!(path = %path.display(), "wrote answer vector");
    Ok(path)
}
