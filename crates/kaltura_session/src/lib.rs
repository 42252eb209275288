//! Admin session providers for the Kaltura API.
//!
//! [`AdminSessionProvider`] starts a fresh admin session on every call.
//! [`CachedSessionProvider`] wraps any provider and reuses its sessions
//! until they come within a refresh margin of expiry. Which one is used is
//! a configuration choice ([`SessionPolicy`](kaltura_core::SessionPolicy)),
//! see [`session_provider_for`].

#![warn(missing_docs)]

mod cache;
mod provider;

pub use cache::{SessionCache, SessionCacheConfig, SessionCacheConfigBuilder};
pub use provider::{AdminSessionProvider, CachedSessionProvider, session_provider_for};
