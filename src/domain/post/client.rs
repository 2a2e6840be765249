//! Posts sub-client — single post lookup by URL.

use crate::client::TikwmClient;
use crate::domain::post::Post;
use crate::error::SdkResult;
use crate::http::QueryParams;

/// Root endpoint (`/api/`).
pub(crate) const METHOD: &str = "";

pub struct Posts<'a> {
    pub(crate) client: &'a TikwmClient,
}

impl<'a> Posts<'a> {
    /// Look up a post by its share URL, requesting HD media variants.
    pub async fn get(&self, url: &str) -> SdkResult<Post> {
        self.get_with_hd(url, true).await
    }

    /// Look up a post by its share URL. `hd = false` omits the HD request.
    pub async fn get_with_hd(&self, url: &str, hd: bool) -> SdkResult<Post> {
        self.client
            .http
            .fetch_typed(METHOD, &post_params(url, hd))
            .await
    }
}

pub(crate) fn post_params(url: &str, hd: bool) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("url".to_string(), url.to_string());
    if hd {
        params.insert("hd".to_string(), "1".to_string());
    }
    params
}
