use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::IdentityError;

/// Identità segnaposto usata finché non esiste una sessione reale.
pub const PLACEHOLDER_USER_ID: &str = "3c0e53ff-25d9-4425-830a-6804b3194455";

/// Identificativo (UUID) dell'utente che scrive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn placeholder() -> Self {
        UserId(PLACEHOLDER_USER_ID.to_string())
    }
}

impl FromStr for UserId {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = Uuid::parse_str(s.trim()).map_err(|e| IdentityError::InvalidUserId {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(UserId(parsed.hyphenated().to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fornisce l'attore delle operazioni di scrittura.
pub trait IdentityProvider {
    fn current_user(&self) -> Option<UserId>;
}

/// Identità fissa (configurazione o test).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedIdentity(pub Option<UserId>);

impl FixedIdentity {
    pub fn new(user: UserId) -> Self {
        FixedIdentity(Some(user))
    }

    pub fn anonymous() -> Self {
        FixedIdentity(None)
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.0.clone()
    }
}
