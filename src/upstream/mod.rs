//! Access to the external music catalog

use serde_json::Value;

use crate::upstream::error::UpstreamError;

pub mod client;
pub mod error;
#[cfg(test)]
pub mod fake;

/// Ordered, untyped records returned by one catalog query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResultSet(Vec<Value>);

impl RawResultSet {
    pub fn new(records: Vec<Value>) -> Self {
        Self(records)
    }

    /// Pulls the `tracks` list out of a watch playlist body.
    ///
    /// Returns `None` when the body has no such list.
    pub fn from_watch_playlist(body: Value) -> Option<Self> {
        match body {
            Value::Object(mut playlist) => match playlist.remove("tracks") {
                Some(Value::Array(tracks)) => Some(Self(tracks)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Search bodies are a bare list of records
    pub fn from_search_results(body: Value) -> Option<Self> {
        match body {
            Value::Array(records) => Some(Self(records)),
            _ => None,
        }
    }

    pub fn records(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Queries the service needs from the catalog.
///
/// `Ok(None)` means the catalog answered but had nothing usable.
pub trait CatalogClient: Send + Sync {
    /// Radio playlist for `seed_id`. The seed itself comes first.
    fn fetch_radio(&self, seed_id: &str, count: usize)
    -> Result<Option<RawResultSet>, UpstreamError>;

    /// Songs matching free text
    fn search_songs(&self, query: &str, count: usize)
    -> Result<Option<RawResultSet>, UpstreamError>;
}
