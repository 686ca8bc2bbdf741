//! flock-client: client nativo delle bacheche Flock.
//! Trasporto reqwest per `/api/posts`, sessione che guida una `HubBoard`, configurazione da env.

pub mod api;
pub mod config;
pub mod session;

pub use api::PostsClient;
pub use config::Config;
pub use session::HubSession;
