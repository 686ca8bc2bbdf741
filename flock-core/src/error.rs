use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Testo mostrato all'utente quando la creazione di un post fallisce.
pub const SUBMIT_ALERT: &str = "Failed to create post";

/// Corpo d'errore restituito dal backend: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errori del percorso di lettura (GET /api/posts).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Rete irraggiungibile, DNS, connessione chiusa...
    #[error("transport error: {0}")]
    Transport(String),

    /// Il backend ha risposto con `{ error }`.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// JSON valido ma non una lista di post.
    #[error("response is not a list of posts")]
    NotAList,

    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Errori del percorso di scrittura (POST /api/posts).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("no authenticated user")]
    Unauthenticated,

    #[error("a post is already being submitted")]
    InFlight,

    #[error("transport error: {0}")]
    Transport(String),

    /// Risposta non-2xx.
    #[error("rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl SubmitError {
    /// Messaggio bloccante da mostrare all'utente.
    pub fn alert(&self) -> &'static str {
        SUBMIT_ALERT
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Solo `name`, `email` e `bio` sono modificabili.
    #[error("unknown profile field '{0}'")]
    UnknownField(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("invalid user id '{value}': {reason}")]
    InvalidUserId { value: String, reason: String },
}
