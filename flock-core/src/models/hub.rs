use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::parse_leading_int;

/// Hub mostrato quando `hubNumber` manca o non è un intero.
pub const DEFAULT_HUB_ID: HubId = HubId(4);

/// Identificativo intero di un hub (`interest_id` sul wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HubId(pub i64);

impl fmt::Display for HubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl HubId {
    /// Interpreta un `hubNumber`: intero iniziale (es. "12abc" -> 12), altrimenti l'hub di default.
    pub fn parse_or_default(raw: Option<&str>) -> HubId {
        raw.and_then(parse_leading_int).map(HubId).unwrap_or(DEFAULT_HUB_ID)
    }
}

/// Hub selezionato dai parametri di navigazione (`hubNumber`, `title`, `color`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubSelection {
    pub hub_id: HubId,
    pub title: Option<String>,
    /// Colore CSS usato come sfondo della bacheca.
    pub color: Option<String>,
}

impl Default for HubSelection {
    fn default() -> Self {
        HubSelection { hub_id: DEFAULT_HUB_ID, title: None, color: None }
    }
}

impl HubSelection {
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        Self::from_lookup(|key| params.get(key).cloned())
    }

    /// Come [`HubSelection::from_query`] ma con una funzione di lookup qualsiasi
    /// (es. `UrlSearchParams::get` nel browser).
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        HubSelection {
            hub_id: HubId::parse_or_default(get("hubNumber").as_deref()),
            title: get("title"),
            color: get("color"),
        }
    }
}
