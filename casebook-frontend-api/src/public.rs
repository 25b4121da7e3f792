use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use casebook_boundary::{CommentList, CreatedComment, NewComment, SearchResponse};

use crate::{into_json, Result};

/// Public casebook API
#[derive(Debug, Clone)]
pub struct PublicApi {
    url: String,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn comments(&self, article_id: &str) -> Result<CommentList> {
        let url = comments_url(&self.url, article_id);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn create_comment(
        &self,
        article_id: &str,
        comment: &NewComment,
    ) -> Result<CreatedComment> {
        let url = comments_url(&self.url, article_id);
        let response = Request::post(&url).json(comment)?.send().await?;
        into_json(response).await
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = search_url(&self.url, query);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}

#[must_use]
pub fn comments_url(base_url: &str, article_id: &str) -> String {
    let encoded_id = utf8_percent_encode(article_id, NON_ALPHANUMERIC);
    format!("{base_url}/articles/{encoded_id}/comments")
}

#[must_use]
pub fn search_url(base_url: &str, query: &str) -> String {
    let encoded_query = utf8_percent_encode(query, NON_ALPHANUMERIC);
    format!("{base_url}/search?q={encoded_query}")
}
