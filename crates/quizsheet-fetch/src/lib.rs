//! quizsheet-fetch: Remote answer-sheet retrieval.
//!
//! Implements the `ContentFetcher` trait for Drive share links and provides
//! configuration loading for the quizsheet CLI.

pub mod config;
pub mod drive;
pub mod mock;

pub use config::{create_fetcher, load_config, FetchConfig, QuizsheetConfig};
pub use drive::DriveFetcher;
