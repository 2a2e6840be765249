//! User domain — profile details and the paged post feed.

pub mod client;

use serde::{Deserialize, Serialize};

use crate::domain::post::Post;
use crate::shared::serde_util::string_or_number;

/// One page of a user's posts (`user/posts`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserFeed {
    pub videos: Vec<Post>,
    /// Opaque cursor for the next page.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub cursor: String,
    #[serde(rename = "hasMore", alias = "has_more")]
    pub has_more: bool,
}

impl UserFeed {
    /// Whether another page can be requested with [`cursor`](Self::cursor).
    pub fn has_next_page(&self) -> bool {
        self.has_more && !self.videos.is_empty()
    }
}

/// Profile lookup result (`user/info`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserDetail {
    pub user: UserProfile,
    pub stats: UserStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub id: String,
    pub unique_id: String,
    pub nickname: String,
    pub avatar_thumb: String,
    pub avatar_medium: String,
    pub avatar_larger: String,
    pub signature: String,
    pub verified: bool,
    pub sec_uid: String,
    pub private_account: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UserStats {
    pub follower_count: u64,
    pub following_count: u64,
    pub heart: u64,
    pub heart_count: u64,
    pub video_count: u64,
    pub digg_count: u64,
    pub friend_count: u64,
}
