use serde::{Deserialize, Serialize};

/// Artist name used when upstream gives no usable artist entry
pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Canonical track record returned to callers.
///
/// Only the normalizers build it, and only for records that carry
/// both a video id and a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub video_id: String,
    pub title: String,
    pub artist: String,
    pub artist_id: Option<String>,
    pub album: Option<String>,
    pub album_id: Option<String>,
    pub duration_seconds: Option<u64>,
    pub thumbnail_url: Option<String>,
    pub is_explicit: bool,
}
