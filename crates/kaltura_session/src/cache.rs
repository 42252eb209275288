//! In-memory session cache.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use kaltura_core::Session;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Configuration for the session cache.
#[derive(
    Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct SessionCacheConfig {
    /// Sessions closer than this to expiry are treated as expired (seconds)
    #[serde(default = "default_refresh_margin_secs")]
    #[builder(default = "default_refresh_margin_secs()")]
    refresh_margin_secs: u64,

    /// Whether caching is enabled
    #[serde(default = "default_enabled")]
    #[builder(default = "default_enabled()")]
    enabled: bool,
}

fn default_refresh_margin_secs() -> u64 {
    60
}

fn default_enabled() -> bool {
    true
}

impl Default for SessionCacheConfig {
    fn default() -> Self {
        Self {
            refresh_margin_secs: default_refresh_margin_secs(),
            enabled: default_enabled(),
        }
    }
}

impl SessionCacheConfig {
    /// Refresh margin as a duration.
    pub fn refresh_margin(&self) -> Duration {
        Duration::from_secs(self.refresh_margin_secs)
    }
}

/// Sessions keyed by partner id.
///
/// Entries are never handed out once they are within the refresh margin of
/// their expiry; such entries are dropped on lookup.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use kaltura_core::Session;
/// use kaltura_session::{SessionCache, SessionCacheConfig};
/// use std::time::Duration;
///
/// let mut cache = SessionCache::new(SessionCacheConfig::default());
/// let now = Utc::now();
/// cache.insert(Session::new("101", "djJ8MTAx", now, Duration::from_secs(3600)));
///
/// assert!(cache.get("101", now).is_some());
/// assert!(cache.get("202", now).is_none());
/// ```
#[derive(Debug)]
pub struct SessionCache {
    config: SessionCacheConfig,
    entries: HashMap<String, Session>,
}

impl SessionCache {
    /// Create a new session cache with configuration.
    pub fn new(config: SessionCacheConfig) -> Self {
        tracing::debug!(
            refresh_margin_secs = config.refresh_margin_secs,
            enabled = config.enabled,
            "Creating new SessionCache"
        );
        Self {
            config,
            entries: HashMap::new(),
        }
    }

    /// Store a session under its partner id, replacing any previous one.
    #[tracing::instrument(
        skip(self, session),
        fields(partner_id = %session.partner_id(), expires_at = %session.expires_at())
    )]
    pub fn insert(&mut self, session: Session) {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, skipping insert");
            return;
        }
        self.entries.insert(session.partner_id().clone(), session);
    }

    /// Get a session for `partner_id` that stays usable past the margin.
    ///
    /// Returns None if:
    /// - No session was cached
    /// - The cached session is expired or about to expire
    /// - Cache is disabled
    #[tracing::instrument(skip(self, now))]
    pub fn get(&mut self, partner_id: &str, now: DateTime<Utc>) -> Option<&Session> {
        if !self.config.enabled {
            return None;
        }

        let margin = self.config.refresh_margin();
        let fresh = self.entries.get(partner_id)?.is_fresh_at(now, margin);
        if !fresh {
            tracing::debug!("Cached session expired or near expiry, removing");
            self.entries.remove(partner_id);
            return None;
        }

        tracing::debug!("Session cache hit");
        self.entries.get(partner_id)
    }

    /// Drop the session for `partner_id`.
    pub fn remove(&mut self, partner_id: &str) -> Option<Session> {
        self.entries.remove(partner_id)
    }

    /// Remove sessions that are no longer valid at `now`.
    pub fn cleanup_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, session| session.is_valid_at(now));

        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::info!(removed, remaining = self.entries.len(), "Cleaned up expired sessions");
        }
        removed
    }

    /// Clear all cached sessions.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        tracing::info!(cleared = count, "Cleared session cache");
    }

    /// Get number of cached sessions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new(SessionCacheConfig::default())
    }
}
