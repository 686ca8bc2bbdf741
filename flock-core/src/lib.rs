//! flock-core: tipi condivisi tra i client Flock (modelli, DTO HTTP, stato della bacheca e del profilo, errori).
//! Niente I/O o dipendenze non compatibili con WASM.

pub mod board;
pub mod editor;
pub mod error;
pub mod models;
pub mod protocol;
pub mod utils;

// Re-export utili per ridurre i percorsi nei crate client
pub use board::{HubBoard, LoadOutcome, LoadState, LoadTicket, SubmitOutcome, SubmitTicket};
pub use editor::ProfileEditor;
pub use error::{EditorError, ErrorBody, FetchError, IdentityError, SubmitError, SUBMIT_ALERT};
pub use models::{
    FixedIdentity, HubId, HubSelection, IdentityProvider, Post, PostRecord, ProfileField, UserId,
    UserProfile,
};
pub use protocol::api::PostsApi;
pub use protocol::http::{
    create_url, decode_create_response, decode_post_list, CreatePostRequest, CreatePostResponse,
    ListPostsQuery,
};
