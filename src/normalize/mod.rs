//! Turns raw catalog records into canonical [`Track`]s.
//!
//! The radio and search responses carry the same data under different
//! keys, so each shape has its own entry point. Both hand their values to
//! [`TrackParts::into_track`], which owns the required-field check and
//! all defaulting.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    config::NormalizerConfig,
    domain::{duration::parse_duration, track::Track},
    normalize::{
        error::RecordError,
        raw::{RadioRecord, RawAlbum, RawArtist, SearchRecord, first_artist, last_thumbnail},
    },
};

pub mod assemble;
pub mod error;
pub mod raw;

/// Normalizes one entry of a radio/watch playlist
pub fn normalize_radio_record(
    raw: &Value,
    config: &NormalizerConfig,
) -> Result<Track, RecordError> {
    let record = RadioRecord::deserialize(raw)?;
    TrackParts {
        video_id: record.video_id,
        title: record.title,
        artists: record.artists,
        album: record.album,
        duration: record.length,
        thumbnails: record.thumbnail,
        is_explicit: record.is_explicit,
    }
    .into_track(config)
}

/// Normalizes one entry of a song search
pub fn normalize_search_record(
    raw: &Value,
    config: &NormalizerConfig,
) -> Result<Track, RecordError> {
    let record = SearchRecord::deserialize(raw)?;
    TrackParts {
        video_id: record.video_id,
        title: record.title,
        artists: record.artists,
        album: record.album,
        duration: record.duration,
        thumbnails: record.thumbnails,
        is_explicit: record.is_explicit,
    }
    .into_track(config)
}

/// Values pulled out of either record shape, before defaulting
struct TrackParts {
    video_id: Option<String>,
    title: Option<String>,
    artists: Option<Vec<Value>>,
    album: Option<RawAlbum>,
    duration: Option<String>,
    thumbnails: Option<Vec<Value>>,
    is_explicit: Option<bool>,
}

impl TrackParts {
    fn into_track(self, config: &NormalizerConfig) -> Result<Track, RecordError> {
        let video_id = non_empty(self.video_id).ok_or(RecordError::MissingField("video id"))?;
        let title = non_empty(self.title).ok_or(RecordError::MissingField("title"))?;

        let (artist, artist_id) = match first_artist(self.artists.as_deref().unwrap_or_default())? {
            Some(RawArtist { name, id }) => (name, id),
            None => (None, None),
        };

        let (album, album_id) = match self.album {
            Some(RawAlbum { name, id }) => (name, id),
            None => (None, None),
        };

        // last candidate is the largest one
        let thumbnail_url = last_thumbnail(self.thumbnails.as_deref().unwrap_or_default())?
            .and_then(|thumbnail| thumbnail.url);

        Ok(Track {
            video_id,
            title,
            artist: artist.unwrap_or_else(|| config.unknown_artist.clone()),
            artist_id,
            album,
            album_id,
            duration_seconds: self.duration.as_deref().and_then(parse_duration),
            thumbnail_url,
            is_explicit: self.is_explicit.unwrap_or(false),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
