//! Content fetcher capability.
//!
//! Implemented by the `quizsheet-fetch` crate. The core only knows that a
//! source identifier can be turned into bytes; link grammars and transports
//! stay with the implementations.

use async_trait::async_trait;

use crate::error::Result;

/// A backend that retrieves the bytes behind a source identifier.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Human-readable fetcher name (e.g. "drive").
    fn name(&self) -> &str;

    /// Check that `source` is one this fetcher can handle, without touching
    /// the network. Called before any local side effects of a retrieval.
    fn validate(&self, _source: &str) -> Result<()> {
        Ok(())
    }

    /// Fetch the full content of `source`.
    ///
    /// Unrecognized or unreachable sources fail with
    /// [`SheetError::InvalidLink`](crate::error::SheetError::InvalidLink).
    async fn fetch(&self, source: &str) -> Result<Vec<u8>>;
}
