pub mod user;
pub mod hub;
pub mod post;
pub mod profile;

// Re-export per comodità
pub use user::{FixedIdentity, IdentityProvider, UserId};
pub use hub::{HubId, HubSelection};
pub use post::{Post, PostRecord};
pub use profile::{ProfileField, UserProfile};
