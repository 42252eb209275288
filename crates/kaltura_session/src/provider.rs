//! Session providers.

use crate::{SessionCache, SessionCacheConfig};
use async_trait::async_trait;
use chrono::Utc;
use kaltura_core::{
    Credentials, KalturaConfig, Session, SessionPolicy, SessionStartBuilder, SessionType,
};
use kaltura_error::{AuthenticationError, AuthenticationErrorKind, KalturaResult};
use kaltura_interface::{MediaApi, SessionProvider};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Starts a new admin session on every call.
///
/// The privileges string is forwarded as given, but for admin sessions the
/// service ignores it: every session from this provider has full partner
/// privileges.
pub struct AdminSessionProvider {
    api: Arc<dyn MediaApi>,
    credentials: Credentials,
    expiry: Duration,
    privileges: String,
}

impl AdminSessionProvider {
    /// Create a provider with the given credentials and session lifetime.
    pub fn new(api: Arc<dyn MediaApi>, credentials: Credentials, expiry: Duration) -> Self {
        Self {
            api,
            credentials,
            expiry,
            privileges: String::new(),
        }
    }

    /// Privileges string to request. Has no effect on admin sessions.
    pub fn with_privileges(mut self, privileges: impl Into<String>) -> Self {
        self.privileges = privileges.into();
        self
    }

    /// Partner the sessions are started for.
    pub fn partner_id(&self) -> &str {
        self.credentials.partner_id()
    }
}

#[async_trait]
impl SessionProvider for AdminSessionProvider {
    #[tracing::instrument(skip(self), fields(partner_id = %self.credentials.partner_id()))]
    async fn session(&self) -> KalturaResult<Session> {
        if let Some(field) = self.credentials.missing() {
            tracing::error!(field, "Cannot start session: credential missing");
            return Err(AuthenticationError::new(AuthenticationErrorKind::MissingCredential(
                field.to_string(),
            ))
            .into());
        }

        let request = SessionStartBuilder::default()
            .secret(self.credentials.admin_secret().as_str())
            .session_type(SessionType::Admin)
            .partner_id(self.credentials.partner_id().as_str())
            .expiry_secs(self.expiry.as_secs())
            .privileges(self.privileges.as_str())
            .build()
            .map_err(|e| {
                AuthenticationError::new(AuthenticationErrorKind::MissingCredential(e.to_string()))
            })?;

        let created_at = Utc::now();
        let token = self.api.start_session(&request).await.map_err(|e| {
            tracing::error!(error = %e, "Session start failed");
            AuthenticationError::new(AuthenticationErrorKind::SessionStart {
                partner_id: self.credentials.partner_id().clone(),
                reason: e.kind.to_string(),
            })
        })?;

        if token.trim().is_empty() {
            tracing::error!("Session start returned an empty token");
            return Err(AuthenticationError::new(AuthenticationErrorKind::SessionStart {
                partner_id: self.credentials.partner_id().clone(),
                reason: "empty session token".to_string(),
            })
            .into());
        }

        let session = Session::new(
            self.credentials.partner_id().as_str(),
            token,
            created_at,
            self.expiry,
        );
        tracing::info!(expires_at = %session.expires_at(), "Started admin session");
        Ok(session)
    }
}

/// Reuses sessions from an inner provider until they near expiry.
///
/// The cache lock is held while a replacement session is started, so
/// concurrent callers wait for one remote call instead of each making their
/// own.
pub struct CachedSessionProvider<P> {
    inner: P,
    partner_id: String,
    cache: Mutex<SessionCache>,
}

impl<P: SessionProvider> CachedSessionProvider<P> {
    /// Wrap `inner`, caching its sessions under `partner_id`.
    pub fn new(inner: P, partner_id: impl Into<String>, config: SessionCacheConfig) -> Self {
        Self {
            inner,
            partner_id: partner_id.into(),
            cache: Mutex::new(SessionCache::new(config)),
        }
    }
}

#[async_trait]
impl<P: SessionProvider> SessionProvider for CachedSessionProvider<P> {
    #[tracing::instrument(skip(self), fields(partner_id = %self.partner_id))]
    async fn session(&self) -> KalturaResult<Session> {
        let mut cache = self.cache.lock().await;
        if let Some(session) = cache.get(&self.partner_id, Utc::now()) {
            return Ok(session.clone());
        }

        let session = self.inner.session().await?;
        cache.insert(session.clone());
        Ok(session)
    }

    async fn invalidate(&self) {
        self.cache.lock().await.remove(&self.partner_id);
        self.inner.invalidate().await;
    }
}

/// Build the session provider selected by `config.session.policy`.
pub fn session_provider_for(
    api: Arc<dyn MediaApi>,
    config: &KalturaConfig,
) -> Arc<dyn SessionProvider> {
    let admin = AdminSessionProvider::new(api, config.credentials(), config.session.expiry());

    match config.session.policy {
        SessionPolicy::PerRequest => {
            tracing::debug!("Using per-request sessions");
            Arc::new(admin)
        }
        SessionPolicy::Cached => {
            tracing::debug!(
                refresh_margin_secs = config.session.refresh_margin_secs,
                "Using cached sessions"
            );
            let cache_config = SessionCacheConfig::default()
                .with_refresh_margin_secs(config.session.refresh_margin_secs);
            Arc::new(CachedSessionProvider::new(
                admin,
                config.partner_id.clone(),
                cache_config,
            ))
        }
    }
}
