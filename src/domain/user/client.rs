//! Users sub-client — profile details and feed paging.

use async_stream::try_stream;
use futures_util::{Stream, TryStreamExt};

use crate::client::TikwmClient;
use crate::domain::post::Post;
use crate::domain::user::{UserDetail, UserFeed};
use crate::error::SdkResult;
use crate::http::QueryParams;

pub(crate) const FEED_METHOD: &str = "user/posts";
pub(crate) const INFO_METHOD: &str = "user/info";

pub struct Users<'a> {
    pub(crate) client: &'a TikwmClient,
}

impl<'a> Users<'a> {
    /// One page of a user's posts.
    ///
    /// A numeric identifier is sent as `user_id`, anything else as the
    /// `unique_id` handle. Pass an empty `cursor` for the first page.
    pub async fn feed_page(
        &self,
        user_id: &str,
        count: u32,
        cursor: &str,
    ) -> SdkResult<UserFeed> {
        fetch_feed_page(self.client, user_id, count, cursor).await
    }

    /// Profile details by handle.
    pub async fn detail(&self, unique_id: &str) -> SdkResult<UserDetail> {
        let mut params = QueryParams::new();
        params.insert("unique_id".to_string(), unique_id.to_string());
        self.client.http.fetch_typed(INFO_METHOD, &params).await
    }

    /// Stream a user's posts page by page, newest first.
    ///
    /// Pages are at most `max_user_feed_count` long. The stream ends after
    /// `limit` posts (`None` for no limit), when the upstream reports no more
    /// pages, or after yielding the first error.
    pub fn feed(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> impl Stream<Item = SdkResult<Post>> + 'a {
        let client = self.client;
        let user_id = user_id.to_string();

        try_stream! {
            let max_page = client.http.config().await.max_user_feed_count.max(1) as usize;
            let mut remaining = limit;
            let mut cursor = String::new();

            loop {
                let count = match remaining {
                    Some(0) => break,
                    Some(n) => n.min(max_page),
                    None => max_page,
                };

                let page = fetch_feed_page(client, &user_id, count as u32, &cursor).await?;
                let has_next = page.has_next_page();
                let stalled = !cursor.is_empty() && page.cursor == cursor;
                tracing::debug!(
                    user_id = %user_id,
                    posts = page.videos.len(),
                    cursor = %page.cursor,
                    has_next,
                    "Fetched feed page"
                );
                cursor = page.cursor;

                for post in page.videos {
                    if let Some(n) = remaining.as_mut() {
                        if *n == 0 {
                            break;
                        }
                        *n -= 1;
                    }
                    yield post;
                }

                if !has_next || stalled {
                    break;
                }
            }
        }
    }

    /// Drain [`feed`](Self::feed) into a vector.
    pub async fn collect_feed(&self, user_id: &str, limit: Option<usize>) -> SdkResult<Vec<Post>> {
        self.feed(user_id, limit).try_collect().await
    }
}

async fn fetch_feed_page(
    client: &TikwmClient,
    user_id: &str,
    count: u32,
    cursor: &str,
) -> SdkResult<UserFeed> {
    client
        .http
        .fetch_typed(FEED_METHOD, &feed_params(user_id, count, cursor))
        .await
}

pub(crate) fn feed_params(user_id: &str, count: u32, cursor: &str) -> QueryParams {
    let key = if user_id.parse::<i64>().is_ok() {
        "user_id"
    } else {
        "unique_id"
    };

    let mut params = QueryParams::new();
    params.insert(key.to_string(), user_id.to_string());
    params.insert("count".to_string(), count.to_string());
    params.insert("cursor".to_string(), cursor.to_string());
    params
}
