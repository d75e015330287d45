//! quizsheet-core: Answer-sheet parsing, encoding, and collation.
//!
//! This crate defines the answer data model, the error taxonomy, and the
//! parsing and collation logic the rest of quizsheet builds on.

pub mod codec;
pub mod collate;
pub mod error;
pub mod model;
pub mod naming;
pub mod parser;
pub mod retrieval;
pub mod traits;

pub use error::{ErrorKind, Result, SheetError};
pub use model::{AnswerVector, CollatedDataset, ScanStrategy, SortOrder};
