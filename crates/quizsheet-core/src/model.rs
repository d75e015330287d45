//! Core data model types for quizsheet.
//!
//! These are the types shared by the parser, the codec, and the collation
//! aggregator.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SheetError};

/// Number of questions on every answer sheet.
pub const QUESTION_COUNT: usize = 100;

/// Number of option lines following each question header.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Answer value recorded for a question with no marked option.
pub const UNANSWERED: u8 = 0;

/// One respondent's answers: exactly [`QUESTION_COUNT`] values in `0..=4`.
///
/// `0` means unanswered; `1..=4` is the 1-based position of the selected
/// option. Serializes as a plain integer array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct AnswerVector(Vec<u8>);

impl AnswerVector {
    /// Wrap values already known to satisfy the length and range invariant.
    pub(crate) fn from_checked(values: Vec<u8>) -> Self {
        debug_assert!(check_answers(&values).is_ok());
        Self(values)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Answer for a 1-based question number.
    pub fn answer(&self, question: usize) -> Option<u8> {
        question.checked_sub(1).and_then(|i| self.0.get(i).copied())
    }

    /// Number of questions with a selected option.
    pub fn answered_count(&self) -> usize {
        self.0.iter().filter(|&&a| a != UNANSWERED).count()
    }
}

impl TryFrom<Vec<u8>> for AnswerVector {
    type Error = SheetError;

    fn try_from(values: Vec<u8>) -> Result<Self> {
        check_answers(&values)?;
        Ok(Self(values))
    }
}

impl From<AnswerVector> for Vec<u8> {
    fn from(v: AnswerVector) -> Self {
        v.0
    }
}

impl AsRef<[u8]> for AnswerVector {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Validate raw answer values against the vector invariant.
pub fn check_answers(values: &[u8]) -> Result<()> {
    if values.len() != QUESTION_COUNT {
        return Err(SheetError::InvalidInput(format!(
            "answers must contain exactly {QUESTION_COUNT} elements, got {}",
            values.len()
        )));
    }
    if let Some((i, v)) = values
        .iter()
        .enumerate()
        .find(|(_, &v)| v as usize > OPTIONS_PER_QUESTION)
    {
        return Err(SheetError::InvalidInput(format!(
            "answer for question {} is {v}, expected 0..={OPTIONS_PER_QUESTION}",
            i + 1
        )));
    }
    Ok(())
}

/// Order in which respondent files are collated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// By respondent index extracted from the file name.
    #[default]
    Numeric,
    /// By raw file name, so `_10` sorts before `_2`.
    Lexicographic,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Numeric => write!(f, "numeric"),
            SortOrder::Lexicographic => write!(f, "lexicographic"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numeric" => Ok(SortOrder::Numeric),
            "lexicographic" | "lex" | "name" => Ok(SortOrder::Lexicographic),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// How the parser locates question blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStrategy {
    /// Key blocks by the number in their header, then check completeness.
    #[default]
    Indexed,
    /// Single pass matching headers against an expected counter.
    Sequential,
}

impl fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanStrategy::Indexed => write!(f, "indexed"),
            ScanStrategy::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for ScanStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "indexed" => Ok(ScanStrategy::Indexed),
            "sequential" => Ok(ScanStrategy::Sequential),
            other => Err(format!("unknown scan strategy: {other}")),
        }
    }
}

/// One respondent's parsed answers and where they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RespondentAnswers {
    /// Respondent index taken from the file name.
    pub index: u32,
    /// Source file name (no directory).
    pub file_name: String,
    pub answers: AnswerVector,
}

/// The result of collating a directory of respondent files.
#[derive(Debug, Clone, Serialize)]
pub struct CollatedDataset {
    /// Respondents in collation order.
    pub entries: Vec<RespondentAnswers>,
    /// Path of the combined output file that was written.
    pub output_path: PathBuf,
}

impl CollatedDataset {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Answer vectors in collation order.
    pub fn vectors(&self) -> impl Iterator<Item = &AnswerVector> {
        self.entries.iter().map(|e| &e.answers)
    }
}
