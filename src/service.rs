use std::sync::Arc;

use log::{info, warn};

use crate::{
    config::{NormalizerConfig, UpstreamConfig},
    domain::track::Track,
    normalize::assemble::{assemble_search, assemble_similar},
    upstream::{CatalogClient, error::UpstreamError},
};

/// Answers track queries by asking the catalog and normalizing what it returns.
///
/// Holds no per-request state; one instance serves every request.
pub struct TrackService {
    catalog: Arc<dyn CatalogClient>,
    overfetch: usize,
    normalizer: NormalizerConfig,
}

impl TrackService {
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        upstream: &UpstreamConfig,
        normalizer: NormalizerConfig,
    ) -> Self {
        Self {
            catalog,
            overfetch: upstream.overfetch,
            normalizer,
        }
    }

    /// Up to `limit` tracks from the radio of `video_id`, without the seed itself
    pub fn similar_tracks(&self, video_id: &str, limit: usize) -> Result<Vec<Track>, UpstreamError> {
        info!("Getting similar tracks for video_id={video_id}, limit={limit}");

        // the seed and rejected records are not returned, so ask for more
        let results = self
            .catalog
            .fetch_radio(video_id, limit.saturating_add(self.overfetch))?;
        if results.is_none() {
            warn!("No watch playlist found for video_id={video_id}");
        }

        let tracks = assemble_similar(results.as_ref(), limit, &self.normalizer);
        info!("Found {} similar tracks for video_id={video_id}", tracks.len());
        Ok(tracks)
    }

    pub fn search_tracks(&self, query: &str, limit: usize) -> Result<Vec<Track>, UpstreamError> {
        info!("Searching for: {query}, limit={limit}");

        let results = self.catalog.search_songs(query, limit)?;

        let tracks = assemble_search(results.as_ref(), limit, &self.normalizer);
        info!("Found {} tracks for query: {query}", tracks.len());
        Ok(tracks)
    }
}
