use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{ErrorBody, FetchError, SubmitError, SUBMIT_ALERT};
use crate::models::{HubId, PostRecord, UserId};
/*
    dto e decoder per /api/posts, condivisi dai client nativo e web
*/
pub const POSTS_PATH: &str = "/api/posts";

// List posts: GET /api/posts?interest_id=..
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub interest_id: HubId,
}

impl ListPostsQuery {
    /// URL completo della lettura, `base` senza slash finale.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}?interest_id={}", base.trim_end_matches('/'), POSTS_PATH, self.interest_id)
    }
}

// Create post: POST /api/posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub user_id: UserId,
    pub interest_id: HubId,
    pub post_title: String,
    pub post_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub post: PostRecord,
}

pub fn create_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), POSTS_PATH)
}

/// Interpreta il corpo della lettura. Solo un array JSON è una lista di post
/// (gli elementi senza un `post_id` utilizzabile vengono scartati);
/// un `{ error }` diventa [`FetchError::Server`], qualsiasi altra cosa [`FetchError::NotAList`].
pub fn decode_post_list(status: u16, body: &str) -> Result<Vec<PostRecord>, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    if let Value::Array(items) = value {
        // un elemento rotto non deve svuotare tutta la bacheca
        let records = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<PostRecord>(item) {
                Ok(record) => Some(record),
                Err(error) => {
                    warn!(%error, "skipping unusable post in list");
                    None
                }
            })
            .collect();
        return Ok(records);
    }
    match value.get("error") {
        Some(Value::String(message)) => Err(FetchError::Server { status, message: message.clone() }),
        _ => Err(FetchError::NotAList),
    }
}

/// Interpreta la risposta della creazione: 2xx con `{ post }`, altrimenti `{ error }`.
pub fn decode_create_response(status: u16, body: &str) -> Result<PostRecord, SubmitError> {
    if (200..300).contains(&status) {
        let resp: CreatePostResponse =
            serde_json::from_str(body).map_err(|e| SubmitError::Malformed(e.to_string()))?;
        return Ok(resp.post);
    }
    // il corpo d'errore è facoltativo: senza messaggio si usa quello generico
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| SUBMIT_ALERT.to_string());
    Err(SubmitError::Rejected { status, message })
}
