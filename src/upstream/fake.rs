//! In-memory catalog for tests

use std::sync::Mutex;

use serde_json::Value;

use crate::upstream::{CatalogClient, RawResultSet, error::UpstreamError};

#[derive(Debug, Default)]
pub struct StaticCatalog {
    radio: Option<RawResultSet>,
    search: Option<RawResultSet>,
    failing: bool,
    calls: Mutex<Vec<(String, usize)>>,
}

impl StaticCatalog {
    /// Answers nothing usable to every query
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_radio(records: Vec<Value>) -> Self {
        Self {
            radio: Some(RawResultSet::new(records)),
            ..Self::default()
        }
    }

    pub fn with_search(records: Vec<Value>) -> Self {
        Self {
            search: Some(RawResultSet::new(records)),
            ..Self::default()
        }
    }

    /// Fails every query with a 502
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// `(argument, count)` of every query received so far
    pub fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(
        &self,
        argument: &str,
        count: usize,
        results: &Option<RawResultSet>,
    ) -> Result<Option<RawResultSet>, UpstreamError> {
        self.calls
            .lock()
            .unwrap()
            .push((argument.to_string(), count));

        if self.failing {
            return Err(UpstreamError::Status {
                url: "fake://catalog".to_string(),
                status: 502,
            });
        }
        Ok(results.clone())
    }
}

impl CatalogClient for StaticCatalog {
    fn fetch_radio(
        &self,
        seed_id: &str,
        count: usize,
    ) -> Result<Option<RawResultSet>, UpstreamError> {
        self.answer(seed_id, count, &self.radio)
    }

    fn search_songs(
        &self,
        query: &str,
        count: usize,
    ) -> Result<Option<RawResultSet>, UpstreamError> {
        self.answer(query, count, &self.search)
    }
}
