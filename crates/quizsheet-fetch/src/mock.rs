//! Mock fetcher for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use quizsheet_core::error::{Result, SheetError};
use quizsheet_core::traits::ContentFetcher;

/// A fetcher serving canned content, for exercising retrieval without a
/// network.
pub struct MockFetcher {
    /// Map of source → content.
    contents: HashMap<String, Vec<u8>>,
    call_count: AtomicU32,
    last_source: Mutex<Option<String>>,
}

impl MockFetcher {
    pub fn new(contents: HashMap<String, Vec<u8>>) -> Self {
        Self {
            contents,
            call_count: AtomicU32::new(0),
            last_source: Mutex::new(None),
        }
    }

    /// A mock serving a single source.
    pub fn with_source(source: &str, content: impl Into<Vec<u8>>) -> Self {
        Self::new(HashMap::from([(source.to_string(), content.into())]))
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn last_source(&self) -> Option<String> {
        self.last_source.lock().ok().and_then(|s| s.clone())
    }
}

#[async_trait]
impl ContentFetcher for MockFetcher {
    fn name(&self) -> &str {
        "mock"
    }

    fn validate(&self, source: &str) -> Result<()> {
        if self.contents.contains_key(source) {
            Ok(())
        } else {
            Err(SheetError::InvalidLink(format!("unknown source: {source}")))
        }
    }

    async fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut last) = self.last_source.lock() {
            *last = Some(source.to_string());
        }

        self.contents
            .get(source)
            .cloned()
            .ok_or_else(|| SheetError::InvalidLink(format!("unknown source: {source}")))
    }
}
