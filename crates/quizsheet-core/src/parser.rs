//! Answer-sheet parser.
//!
//! Turns the text of one respondent's sheet into an [`AnswerVector`]. A sheet
//! is a run of question blocks, each a `Question {n}.` header line followed by
//! four option lines; an option containing `[x]` is the selected one. Lines
//! outside blocks are ignored.

use std::io;
use std::path::Path;

use crate::error::{Result, SheetError};
use crate::model::{AnswerVector, ScanStrategy, OPTIONS_PER_QUESTION, QUESTION_COUNT, UNANSWERED};

const HEADER_PREFIX: &str = "Question ";
const SELECTED_MARKER: &str = "[x]";

/// Read and parse a sheet file.
///
/// A missing or unreadable file is an I/O error; a file that is not valid
/// UTF-8 is malformed input. Malformed-input messages name the file.
pub fn parse_sheet(path: &Path, strategy: ScanStrategy) -> Result<AnswerVector> {
    parse_sheet_unnamed(path, strategy).map_err(|e| match e {
        SheetError::MalformedInput(msg) => {
            SheetError::MalformedInput(format!("{msg} in {}", path.display()))
        }
        other => other,
    })
}

/// Like [`parse_sheet`], but malformed-input messages leave naming the file
/// to the caller.
pub(crate) fn parse_sheet_unnamed(path: &Path, strategy: ScanStrategy) -> Result<AnswerVector> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::InvalidData {
            SheetError::MalformedInput("file is not valid UTF-8".into())
        } else {
            SheetError::read(path, e)
        }
    })?;

    let answers = parse_sheet_str(&content, strategy)?;

    tracing::debug!(
        path = %path.display(),
        answered = answers.answered_count(),
        "parsed answer sheet"
    );
    Ok(answers)
}

/// Parse sheet text (useful for testing). Accepts `\n` and `\r\n` endings.
pub fn parse_sheet_str(content: &str, strategy: ScanStrategy) -> Result<AnswerVector> {
    let lines: Vec<&str> = content.lines().collect();
    parse_lines(&lines, strategy)
}

/// Parse a sequence of sheet lines into an answer vector.
pub fn parse_lines<S: AsRef<str>>(lines: &[S], strategy: ScanStrategy) -> Result<AnswerVector> {
    let answers = match strategy {
        ScanStrategy::Indexed => scan_indexed(lines)?,
        ScanStrategy::Sequential => scan_sequential(lines)?,
    };

    if answers.len() != QUESTION_COUNT {
        return Err(SheetError::MalformedInput(format!(
            "expected {QUESTION_COUNT} questions, found {}",
            answers.len()
        )));
    }
    Ok(AnswerVector::from_checked(answers))
}

/// Counter-driven single pass: only `Question {expected}.` is recognized, and
/// each match consumes the following option lines.
fn scan_sequential<S: AsRef<str>>(lines: &[S]) -> Result<Vec<u8>> {
    let mut answers = Vec::with_capacity(QUESTION_COUNT);
    let mut expected = header_for(1);
    let mut i = 0;

    while answers.len() < QUESTION_COUNT && i < lines.len() {
        if !lines[i].as_ref().starts_with(&expected) {
            i += 1;
            continue;
        }
        let question = answers.len() + 1;
        let options = option_lines(lines, i, question)?;
        answers.push(selected_option(options));
        i += 1 + OPTIONS_PER_QUESTION;
        expected = header_for(question + 1);
    }

    Ok(answers)
}

/// Blocks are keyed by the number in their header, so order in the file does
/// not matter. Every question must appear exactly once; headers numbered
/// outside the sheet are skipped.
fn scan_indexed<S: AsRef<str>>(lines: &[S]) -> Result<Vec<u8>> {
    let mut slots: Vec<Option<u8>> = vec![None; QUESTION_COUNT];
    let mut i = 0;

    while i < lines.len() {
        let Some(question) = header_number(lines[i].as_ref()) else {
            i += 1;
            continue;
        };
        if !(1..=QUESTION_COUNT).contains(&question) {
            tracing::warn!("skipping header for question {question}, outside 1..={QUESTION_COUNT}");
            i += 1;
            continue;
        }
        let options = option_lines(lines, i, question)?;
        let slot = &mut slots[question - 1];
        if slot.is_some() {
            return Err(SheetError::MalformedInput(format!(
                "duplicate block for question {question}"
            )));
        }
        *slot = Some(selected_option(options));
        i += 1 + OPTIONS_PER_QUESTION;
    }

    let missing = slots.iter().filter(|s| s.is_none()).count();
    if let Some(first) = slots.iter().position(Option::is_none) {
        return Err(SheetError::MalformedInput(format!(
            "expected {QUESTION_COUNT} questions, found {} (question {} missing)",
            QUESTION_COUNT - missing,
            first + 1
        )));
    }

    Ok(slots.into_iter().flatten().collect())
}

fn header_for(question: usize) -> String {
    format!("{HEADER_PREFIX}{question}.")
}

/// Question number of a `Question {n}.` header line.
fn header_number(line: &str) -> Option<usize> {
    let rest = line.strip_prefix(HEADER_PREFIX)?;
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 || !rest[end..].starts_with('.') {
        return None;
    }
    rest[..end].parse().ok()
}

/// The option lines following the header at `header_at`.
fn option_lines<S: AsRef<str>>(lines: &[S], header_at: usize, question: usize) -> Result<&[S]> {
    let start = header_at + 1;
    lines
        .get(start..start + OPTIONS_PER_QUESTION)
        .ok_or_else(|| {
            SheetError::MalformedInput(format!(
                "malformed block at question {question}: {} of {OPTIONS_PER_QUESTION} option lines",
                lines.len().saturating_sub(start)
            ))
        })
}

/// 1-based position of the first marked option, or [`UNANSWERED`].
fn selected_option<S: AsRef<str>>(options: &[S]) -> u8 {
    options
        .iter()
        .position(|o| o.as_ref().contains(SELECTED_MARKER))
        .map_or(UNANSWERED, |i| (i + 1) as u8)
}
