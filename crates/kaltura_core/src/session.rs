//! Authenticated session types.

use chrono::{DateTime, TimeDelta, Utc};
use derive_getters::Getters;
use std::fmt;
use std::time::Duration;

/// Default session lifetime in seconds (one day).
pub const DEFAULT_EXPIRY_SECS: u64 = 86_400;

/// Kaltura session type.
///
/// Only [`SessionType::Admin`] is used by the thumbnail pipeline. For admin
/// sessions the remote API ignores the privileges string entirely, so a
/// session started this way always carries full partner privileges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SessionType {
    /// End-user session
    #[display("user")]
    User,
    /// Partner administrator session
    #[display("admin")]
    Admin,
}

impl SessionType {
    /// Value sent in the `type` field of `session.start`.
    pub fn wire_value(&self) -> u8 {
        match self {
            SessionType::User => 0,
            SessionType::Admin => 2,
        }
    }
}

/// Credentials needed to start an admin session.
#[derive(Clone, PartialEq, Eq, Getters)]
pub struct Credentials {
    server_url: String,
    partner_id: String,
    admin_secret: String,
}

impl Credentials {
    /// Create credentials.
    pub fn new(
        server_url: impl Into<String>,
        partner_id: impl Into<String>,
        admin_secret: impl Into<String>,
    ) -> Self {
        Self {
            server_url: server_url.into(),
            partner_id: partner_id.into(),
            admin_secret: admin_secret.into(),
        }
    }

    /// Name of the first credential that is empty or whitespace, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaltura_core::Credentials;
    ///
    /// let creds = Credentials::new("https://www.kaltura.com", "101", "");
    /// assert_eq!(creds.missing(), Some("admin_secret"));
    /// ```
    pub fn missing(&self) -> Option<&'static str> {
        [
            ("server_url", &self.server_url),
            ("partner_id", &self.partner_id),
            ("admin_secret", &self.admin_secret),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("server_url", &self.server_url)
            .field("partner_id", &self.partner_id)
            .field("admin_secret", &"<redacted>")
            .finish()
    }
}

/// Parameters of a `session.start` call.
///
/// # Examples
///
/// ```
/// use kaltura_core::{SessionStartBuilder, SessionType};
///
/// let start = SessionStartBuilder::default()
///     .secret("s3cr3t")
///     .partner_id("101")
///     .session_type(SessionType::Admin)
///     .build()
///     .unwrap();
/// assert_eq!(*start.expiry_secs(), 86_400);
/// assert!(start.privileges().is_empty());
/// ```
#[derive(Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct SessionStart {
    /// Admin secret of the partner.
    secret: String,
    /// User id bound to the session (empty for partner-level sessions).
    #[builder(default)]
    user_id: String,
    /// Session type.
    #[builder(default = "SessionType::Admin")]
    session_type: SessionType,
    /// Partner id.
    partner_id: String,
    /// Lifetime of the session in seconds.
    #[builder(default = "DEFAULT_EXPIRY_SECS")]
    expiry_secs: u64,
    /// Privileges string. Ignored by the service for admin sessions.
    #[builder(default)]
    privileges: String,
}

impl fmt::Debug for SessionStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStart")
            .field("secret", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("session_type", &self.session_type)
            .field("partner_id", &self.partner_id)
            .field("expiry_secs", &self.expiry_secs)
            .field("privileges", &self.privileges)
            .finish()
    }
}

/// An authenticated session handle.
///
/// A session is valid strictly before `expires_at`. Once expired it must be
/// re-established; it is never persisted across process restarts.
#[derive(Clone, PartialEq, Eq, Getters)]
pub struct Session {
    partner_id: String,
    token: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a session that expires `ttl` after `created_at`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeDelta, Utc};
    /// use kaltura_core::Session;
    /// use std::time::Duration;
    ///
    /// let now = Utc::now();
    /// let session = Session::new("101", "djJ8MTAx", now, Duration::from_secs(60));
    /// assert!(session.is_valid_at(now));
    /// assert!(!session.is_valid_at(now + TimeDelta::seconds(60)));
    /// ```
    pub fn new(
        partner_id: impl Into<String>,
        token: impl Into<String>,
        created_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        let expires_at = created_at
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            partner_id: partner_id.into(),
            token: token.into(),
            created_at,
            expires_at,
        }
    }

    /// Whether the session can still be used at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Whether the session can still be used right now.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Whether the session stays valid for at least `margin` after `now`.
    pub fn is_fresh_at(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        let margin = TimeDelta::from_std(margin).unwrap_or(TimeDelta::MAX);
        match now.checked_add_signed(margin) {
            Some(deadline) => deadline < self.expires_at,
            None => false,
        }
    }

    /// Time left before expiry, or zero if already expired.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).to_std().unwrap_or(Duration::ZERO)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("partner_id", &self.partner_id)
            .field("token", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
