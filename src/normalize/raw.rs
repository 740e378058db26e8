//! Record shapes as the catalog sends them.
//!
//! Every field is optional. A key that is missing or `null` deserializes
//! to `None`; a key holding the wrong kind of value fails the whole record,
//! except for the duration text, which is read leniently.
//!
//! Artist and thumbnail lists stay untyped here. Only the entry the
//! normalizer actually reads is decoded, see [`first_artist`] and
//! [`last_thumbnail`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One entry of a radio/watch playlist
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioRecord {
    pub video_id: Option<String>,
    pub title: Option<String>,
    pub artists: Option<Vec<Value>>,
    pub album: Option<RawAlbum>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub length: Option<String>,
    pub thumbnail: Option<Vec<Value>>,
    pub is_explicit: Option<bool>,
}

/// One entry of a song search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub video_id: Option<String>,
    pub title: Option<String>,
    pub artists: Option<Vec<Value>>,
    pub album: Option<RawAlbum>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: Option<String>,
    pub thumbnails: Option<Vec<Value>>,
    pub is_explicit: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct RawArtist {
    pub name: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawAlbum {
    pub name: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawThumbnail {
    pub url: Option<String>,
}

/// Decodes the leading artist entry, other entries are never inspected
pub fn first_artist(artists: &[Value]) -> Result<Option<RawArtist>, serde_json::Error> {
    artists.first().map(RawArtist::deserialize).transpose()
}

/// Decodes the trailing thumbnail entry, the largest one the catalog offers
pub fn last_thumbnail(thumbnails: &[Value]) -> Result<Option<RawThumbnail>, serde_json::Error> {
    thumbnails.last().map(RawThumbnail::deserialize).transpose()
}

/// Keeps strings, turns any other value into `None`
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_radio_record_reads_camel_case_keys() -> anyhow::Result<()> {
        let raw = json!({
            "videoId": "abc",
            "title": "Song",
            "length": "3:45",
            "isExplicit": true,
            "thumbnail": [{"url": "small"}, {"url": "large"}]
        });

        let record = RadioRecord::deserialize(&raw)?;

        assert_eq!(record.video_id.as_deref(), Some("abc"));
        assert_eq!(record.length.as_deref(), Some("3:45"));
        assert_eq!(record.is_explicit, Some(true));
        assert_eq!(record.thumbnail.map(|t| t.len()), Some(2));
        Ok(())
    }

    #[test]
    fn test_nulls_and_missing_keys_are_none() -> anyhow::Result<()> {
        let raw = json!({"videoId": null, "artists": null, "album": null});

        let record = SearchRecord::deserialize(&raw)?;

        assert!(record.video_id.is_none());
        assert!(record.title.is_none());
        assert!(record.artists.is_none());
        assert!(record.album.is_none());
        assert!(record.duration.is_none());
        assert!(record.thumbnails.is_none());
        Ok(())
    }

    #[test]
    fn test_non_string_duration_is_dropped_not_rejected() -> anyhow::Result<()> {
        let raw = json!({"videoId": "abc", "title": "Song", "duration": 225});

        let record = SearchRecord::deserialize(&raw)?;

        assert!(record.duration.is_none());
        Ok(())
    }

    #[test]
    fn test_first_artist_ignores_later_entries() -> anyhow::Result<()> {
        let artists = vec![json!({"name": "A", "id": "UC1"}), json!("feat. B"), Value::Null];

        let artist = first_artist(&artists)?.ok_or(anyhow::anyhow!("expected an artist"))?;

        assert_eq!(artist.name.as_deref(), Some("A"));
        assert_eq!(artist.id.as_deref(), Some("UC1"));
        assert!(first_artist(&[])?.is_none());
        Ok(())
    }

    #[test]
    fn test_malformed_first_artist_fails() {
        assert!(first_artist(&[json!("feat. B"), json!({"name": "A"})]).is_err());
        assert!(first_artist(&[Value::Null]).is_err());
    }

    #[test]
    fn test_last_thumbnail_ignores_earlier_entries() -> anyhow::Result<()> {
        let thumbnails = vec![Value::Null, json!(3), json!({"url": "https://img/l.jpg"})];

        let thumbnail = last_thumbnail(&thumbnails)?.ok_or(anyhow::anyhow!("expected a thumbnail"))?;

        assert_eq!(thumbnail.url.as_deref(), Some("https://img/l.jpg"));
        assert!(last_thumbnail(&[])?.is_none());
        assert!(last_thumbnail(&[json!({"url": "x"}), json!("bad")]).is_err());
        Ok(())
    }

    #[test]
    fn test_wrong_shaped_album_fails() {
        let raw = json!({"videoId": "abc", "title": "Song", "album": "not an object"});

        assert!(RadioRecord::deserialize(&raw).is_err());
    }
}
