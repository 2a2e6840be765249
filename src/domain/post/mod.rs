//! Post domain — a single video or photo post.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::{string_or_number, timestamp_secs};

/// A post as returned by the root endpoint and inside feed pages.
///
/// The upstream omits fields freely, so every field falls back to its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Post {
    #[serde(alias = "video_id", deserialize_with = "string_or_number::deserialize")]
    pub id: String,
    pub region: String,
    pub title: String,
    pub cover: String,
    pub origin_cover: String,
    pub ai_dynamic_cover: String,
    /// Seconds.
    pub duration: u64,
    pub play: String,
    pub wmplay: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdplay: Option<String>,
    pub size: u64,
    pub wm_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hd_size: Option<u64>,
    pub music: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_info: Option<MusicInfo>,
    pub play_count: u64,
    pub digg_count: u64,
    pub comment_count: u64,
    pub share_count: u64,
    pub download_count: u64,
    pub collect_count: u64,
    /// Unix seconds.
    pub create_time: i64,
    pub is_ad: bool,
    /// Image URLs for photo (slideshow) posts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

impl Post {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        timestamp_secs(self.create_time)
    }

    /// Photo posts carry images instead of a playable video.
    pub fn is_photo(&self) -> bool {
        self.images.as_ref().is_some_and(|images| !images.is_empty())
    }

    /// HD play URL when the upstream returned one, otherwise the plain one.
    pub fn best_play_url(&self) -> Option<&str> {
        self.hdplay
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| Some(self.play.as_str()).filter(|url| !url.is_empty()))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub id: String,
    pub unique_id: String,
    pub nickname: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MusicInfo {
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub id: String,
    pub title: String,
    pub play: String,
    pub cover: String,
    pub author: String,
    pub original: bool,
    /// Seconds.
    pub duration: u64,
    pub album: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEO_POST: &str = r#"{
        "id": "7300000000000000001",
        "region": "US",
        "title": "clip",
        "cover": "https://cdn.example/cover.jpg",
        "origin_cover": "https://cdn.example/origin.jpg",
        "duration": 12,
        "play": "https://cdn.example/play.mp4",
        "wmplay": "https://cdn.example/wm.mp4",
        "hdplay": "https://cdn.example/hd.mp4",
        "size": 1000,
        "wm_size": 1100,
        "hd_size": 2000,
        "music": "https://cdn.example/music.mp3",
        "music_info": {
            "id": 7200000000000000000,
            "title": "original sound",
            "play": "https://cdn.example/music.mp3",
            "cover": "https://cdn.example/music.jpg",
            "author": "someone",
            "original": true,
            "duration": 12,
            "album": ""
        },
        "play_count": 10,
        "digg_count": 2,
        "comment_count": 1,
        "share_count": 0,
        "download_count": 0,
        "collect_count": 0,
        "create_time": 1700000000,
        "is_ad": false,
        "author": {
            "id": "6800000000000000000",
            "unique_id": "some.user",
            "nickname": "Some User",
            "avatar": "https://cdn.example/avatar.jpg"
        }
    }"#;

    #[test]
    fn test_video_post_deserialize() {
        let post: Post = serde_json::from_str(VIDEO_POST).unwrap();
        assert_eq!(post.id, "7300000000000000001");
        assert_eq!(post.duration, 12);
        assert_eq!(post.hd_size, Some(2000));
        assert_eq!(post.music_info.as_ref().unwrap().id, "7200000000000000000");
        assert_eq!(post.author.as_ref().unwrap().unique_id, "some.user");
        assert_eq!(post.created_at().unwrap().timestamp(), 1_700_000_000);
        assert!(!post.is_photo());
        assert_eq!(post.best_play_url(), Some("https://cdn.example/hd.mp4"));
    }

    #[test]
    fn test_photo_post_deserialize() {
        let json = r#"{
            "id": "7300000000000000002",
            "play": "https://cdn.example/slideshow.mp3",
            "images": ["https://cdn.example/1.jpg", "https://cdn.example/2.jpg"]
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.is_photo());
        assert_eq!(post.images.as_ref().unwrap().len(), 2);
        assert!(post.hdplay.is_none());
        assert_eq!(post.best_play_url(), Some("https://cdn.example/slideshow.mp3"));
    }

    #[test]
    fn test_sparse_post_defaults() {
        let post: Post = serde_json::from_str(r#"{"video_id": 99}"#).unwrap();
        assert_eq!(post.id, "99");
        assert!(post.created_at().is_none());
        assert!(post.best_play_url().is_none());
        assert!(post.author.is_none());
    }
}
