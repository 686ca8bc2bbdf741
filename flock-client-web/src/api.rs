use flock_core::{
    create_url, decode_create_response, decode_post_list, CreatePostRequest, FetchError,
    ListPostsQuery, PostRecord, PostsApi, SubmitError,
};
use gloo_net::http::Request;

/// Trasporto `/api/posts` via fetch del browser. `base` vuoto = stessa origine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlooPostsApi {
    pub base: String,
}

impl PostsApi for GlooPostsApi {
    async fn fetch_posts(&self, query: ListPostsQuery) -> Result<Vec<PostRecord>, FetchError> {
        let response = Request::get(&query.url(&self.base))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
        decode_post_list(status, &body)
    }

    async fn create_post(&self, request: &CreatePostRequest) -> Result<PostRecord, SubmitError> {
        let response = Request::post(&create_url(&self.base))
            .json(request)
            .map_err(|e| SubmitError::Malformed(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| SubmitError::Transport(e.to_string()))?;
        decode_create_response(status, &body)
    }
}
