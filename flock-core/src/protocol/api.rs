use crate::error::{FetchError, SubmitError};
use crate::models::PostRecord;
use crate::protocol::http::{CreatePostRequest, ListPostsQuery};

/// Trasporto verso `/api/posts`. Implementato con reqwest (nativo) e gloo-net (browser).
// niente bound Send sui future: nel browser non sono Send
#[allow(async_fn_in_trait)]
pub trait PostsApi {
    async fn fetch_posts(&self, query: ListPostsQuery) -> Result<Vec<PostRecord>, FetchError>;

    /// Restituisce il post così come lo ha salvato il backend.
    async fn create_post(&self, request: &CreatePostRequest) -> Result<PostRecord, SubmitError>;
}
