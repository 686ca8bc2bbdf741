use std::time::Duration;

use flock_core::{
    create_url, decode_create_response, decode_post_list, CreatePostRequest, FetchError,
    ListPostsQuery, PostRecord, PostsApi, SubmitError,
};
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

/// Client HTTP per `/api/posts`.
#[derive(Clone)]
pub struct PostsClient {
    http: reqwest::Client,
    base: String,
}

impl PostsClient {
    pub fn new(base: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(PostsClient { http: builder.build()?, base: base.trim_end_matches('/').to_string() })
    }
}

impl PostsApi for PostsClient {
    async fn fetch_posts(&self, query: ListPostsQuery) -> Result<Vec<PostRecord>, FetchError> {
        let url = query.url(&self.base);
        debug!(%url, "GET posts");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        // lo status non decide nulla qui: conta solo se il corpo è una lista
        let body = response.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
        decode_post_list(status, &body)
    }

    async fn create_post(&self, request: &CreatePostRequest) -> Result<PostRecord, SubmitError> {
        let url = create_url(&self.base);
        let payload =
            serde_json::to_string(request).map_err(|e| SubmitError::Malformed(e.to_string()))?;
        debug!(%url, %payload, "POST post");
        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| SubmitError::Transport(e.to_string()))?;
        debug!(status, %body, "create post response");
        decode_create_response(status, &body)
    }
}
