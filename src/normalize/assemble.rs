//! Builds bounded track lists out of whole catalog responses.

use log::{debug, warn};
use serde_json::Value;

use crate::{
    config::NormalizerConfig,
    domain::track::Track,
    normalize::{error::RecordError, normalize_radio_record, normalize_search_record},
    upstream::RawResultSet,
};

/// Tracks related to a seed, taken from its radio playlist.
///
/// The first entry of the playlist is the seed itself and is never returned.
/// Rejected records do not count toward `limit`.
pub fn assemble_similar(
    results: Option<&RawResultSet>,
    limit: usize,
    config: &NormalizerConfig,
) -> Vec<Track> {
    let Some(results) = results else {
        return Vec::new();
    };

    collect_tracks(results.records().iter().skip(1), limit, |raw| {
        normalize_radio_record(raw, config)
    })
}

/// Tracks from a song search, in catalog order.
pub fn assemble_search(
    results: Option<&RawResultSet>,
    limit: usize,
    config: &NormalizerConfig,
) -> Vec<Track> {
    let Some(results) = results else {
        return Vec::new();
    };

    collect_tracks(results.records().iter(), limit, |raw| {
        normalize_search_record(raw, config)
    })
}

fn collect_tracks<'a, I, F>(records: I, limit: usize, normalize: F) -> Vec<Track>
where
    I: Iterator<Item = &'a Value>,
    F: Fn(&Value) -> Result<Track, RecordError>,
{
    records
        .filter_map(|raw| match normalize(raw) {
            Ok(track) => Some(track),
            Err(e @ RecordError::MissingField(_)) => {
                debug!("skipping record: {e}");
                None
            }
            Err(e @ RecordError::Malformed(_)) => {
                warn!("failed to parse record, skipping: {e}");
                None
            }
        })
        .take(limit)
        .collect()
}
