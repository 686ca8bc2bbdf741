use std::{env, time::Duration};

use anyhow::Context;
use flock_core::models::hub::DEFAULT_HUB_ID;
use flock_core::utils::parse_leading_int;
use flock_core::{HubId, UserId};
use tracing::info;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:3000";

pub struct Config {
    pub api_base: String,
    /// Identità usata per scrivere (niente sessioni vere, per ora).
    pub user_id: UserId,
    pub hub: HubId,
    /// `None`: timeout di default del trasporto.
    pub http_timeout: Option<Duration>,
}

impl Config {
    /// Legge FLOCK_API_BASE, FLOCK_USER_ID, FLOCK_HUB e FLOCK_HTTP_TIMEOUT_SECS.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = get("FLOCK_API_BASE").unwrap_or_else(|| {
            info!("FLOCK_API_BASE not set, using default: {DEFAULT_API_BASE}");
            DEFAULT_API_BASE.to_string()
        });

        let user_id = match get("FLOCK_USER_ID") {
            Some(raw) => raw.parse::<UserId>().context("parse FLOCK_USER_ID")?,
            None => {
                info!("FLOCK_USER_ID not set, using placeholder identity");
                UserId::placeholder()
            }
        };

        // stesse regole di hubNumber: valore illeggibile -> hub di default
        let hub = match get("FLOCK_HUB").as_deref().map(parse_leading_int) {
            Some(Some(id)) => HubId(id),
            Some(None) => {
                info!("invalid FLOCK_HUB value, using default: {DEFAULT_HUB_ID}");
                DEFAULT_HUB_ID
            }
            None => {
                info!("FLOCK_HUB not set, using default: {DEFAULT_HUB_ID}");
                DEFAULT_HUB_ID
            }
        };

        let http_timeout = get("FLOCK_HTTP_TIMEOUT_SECS")
            .map(|raw| raw.trim().parse::<u64>().map(Duration::from_secs))
            .transpose()
            .context("parse FLOCK_HTTP_TIMEOUT_SECS")?;

        Ok(Config { api_base, user_id, hub, http_timeout })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.user_id, UserId::placeholder());
        assert_eq!(config.hub, HubId(4));
        assert!(config.http_timeout.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            ("FLOCK_API_BASE", "https://flock.example"),
            ("FLOCK_USER_ID", "9f1b0c8e-6f55-4a57-9d2a-0b1f3f2b9c11"),
            ("FLOCK_HUB", "12"),
            ("FLOCK_HTTP_TIMEOUT_SECS", "5"),
        ]))
        .expect("config");
        assert_eq!(config.api_base, "https://flock.example");
        assert_eq!(config.user_id.as_str(), "9f1b0c8e-6f55-4a57-9d2a-0b1f3f2b9c11");
        assert_eq!(config.hub, HubId(12));
        assert_eq!(config.http_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn unparsable_hub_falls_back_to_default() {
        let config = Config::from_lookup(lookup(&[("FLOCK_HUB", "music")])).expect("config");
        assert_eq!(config.hub, HubId(4));
        let config = Config::from_lookup(lookup(&[("FLOCK_HUB", " 9th")])).expect("config");
        assert_eq!(config.hub, HubId(9));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("FLOCK_USER_ID", "lara")])).is_err());
        assert!(Config::from_lookup(lookup(&[("FLOCK_HTTP_TIMEOUT_SECS", "soon")])).is_err());
    }
}
