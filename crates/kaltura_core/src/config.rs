//! Layered configuration for the thumbnail pipeline.
//!
//! Sources, lowest precedence first:
//! 1. Bundled defaults (`kaltura.toml` shipped with this crate)
//! 2. `~/.config/kaltura/kaltura.toml`
//! 3. `./kaltura.toml`
//! 4. `KALTURA__*` environment variables, `__` separating nested keys
//!    (e.g. `KALTURA__ADMIN_SECRET`, `KALTURA__SESSION__POLICY`)

use crate::{Credentials, split_uri};
use config::{Config, Environment, File, FileFormat};
use kaltura_error::{ConfigError, KalturaError, KalturaResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../kaltura.toml");

/// How sessions are reused between thumbnail lookups.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SessionPolicy {
    /// Start a fresh session for every lookup.
    #[default]
    PerRequest,
    /// Reuse a session until it nears expiry.
    Cached,
}

/// What happens when the local thumbnail file already exists.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WritePolicy {
    /// Always overwrite with the freshly downloaded bytes.
    #[default]
    Replace,
    /// Keep the existing file and skip the write.
    SkipIfExists,
}

/// Which identifier names the cached file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum KeySource {
    /// Hash of the resolved thumbnail asset id.
    #[default]
    AssetId,
    /// Hash of the media entry id.
    EntryId,
}

/// Session lifecycle settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Reuse policy
    #[serde(default)]
    pub policy: SessionPolicy,
    /// Lifetime requested from `session.start`
    #[serde(default = "default_expiry_secs")]
    pub expiry_secs: u64,
    /// A cached session is renewed once it has less than this left
    #[serde(default = "default_refresh_margin_secs")]
    pub refresh_margin_secs: u64,
}

fn default_expiry_secs() -> u64 {
    crate::DEFAULT_EXPIRY_SECS
}

fn default_refresh_margin_secs() -> u64 {
    60
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            policy: SessionPolicy::default(),
            expiry_secs: default_expiry_secs(),
            refresh_margin_secs: default_refresh_margin_secs(),
        }
    }
}

impl SessionConfig {
    /// Session lifetime as a duration.
    pub fn expiry(&self) -> Duration {
        Duration::from_secs(self.expiry_secs)
    }

    /// Refresh margin as a duration.
    pub fn refresh_margin(&self) -> Duration {
        Duration::from_secs(self.refresh_margin_secs)
    }
}

/// Local thumbnail cache settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Policy for existing files
    #[serde(default)]
    pub write_policy: WritePolicy,
    /// Stable key source
    #[serde(default)]
    pub key: KeySource,
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct HttpConfig {
    /// Per-request timeout; `None` keeps the client default
    #[serde(default)]
    #[setters(strip_option)]
    pub timeout_secs: Option<u64>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    #[setters(into)]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("kaltura-media/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl HttpConfig {
    /// Timeout as a duration.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Local storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for each URI scheme (`public` -> `files`)
    #[serde(default = "default_schemes")]
    pub schemes: BTreeMap<String, PathBuf>,
}

fn default_schemes() -> BTreeMap<String, PathBuf> {
    BTreeMap::from([("public".to_string(), PathBuf::from("files"))])
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            schemes: default_schemes(),
        }
    }
}

/// Top-level configuration.
///
/// # Example
///
/// ```
/// use kaltura_core::{KalturaConfig, SessionPolicy};
///
/// let config = KalturaConfig::from_toml_str(r#"
///     server_url = "https://www.kaltura.com"
///     partner_id = "101"
///     admin_secret = "s3cr3t"
///
///     [session]
///     policy = "cached"
/// "#).unwrap();
///
/// assert_eq!(config.session.policy, SessionPolicy::Cached);
/// assert_eq!(config.thumbnails_directory, "public://kaltura_thumbnails");
/// config.validate().unwrap();
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KalturaConfig {
    /// URL of the Kaltura server hosting the media
    #[serde(default)]
    pub server_url: String,
    /// Partner id
    #[serde(default)]
    pub partner_id: String,
    /// Partner admin secret
    #[serde(default)]
    pub admin_secret: String,
    /// Player UI conf id, used by the presentation layer only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_conf_id: Option<String>,
    /// Destination for downloaded thumbnails (URI or plain path)
    #[serde(default = "default_thumbnails_directory")]
    pub thumbnails_directory: String,
    /// Session lifecycle
    #[serde(default)]
    pub session: SessionConfig,
    /// Local cache behavior
    #[serde(default)]
    pub cache: CacheConfig,
    /// HTTP client
    #[serde(default)]
    pub http: HttpConfig,
    /// Local storage roots
    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_thumbnails_directory() -> String {
    "public://kaltura_thumbnails".to_string()
}

impl fmt::Debug for KalturaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KalturaConfig")
            .field("server_url", &self.server_url)
            .field("partner_id", &self.partner_id)
            .field("admin_secret", &"<redacted>")
            .field("ui_conf_id", &self.ui_conf_id)
            .field("thumbnails_directory", &self.thumbnails_directory)
            .field("session", &self.session)
            .field("cache", &self.cache)
            .field("http", &self.http)
            .field("storage", &self.storage)
            .finish()
    }
}

impl KalturaConfig {
    /// Load configuration from every source, user values taking precedence.
    ///
    /// User config files are optional and silently skipped if absent.
    #[instrument]
    pub fn load() -> KalturaResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/kaltura/kaltura.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("kaltura").required(false))
            .add_source(Environment::with_prefix("KALTURA").separator("__"));

        Self::build(builder)
    }

    /// Load bundled defaults overlaid with a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> KalturaResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));

        Self::build(builder)
    }

    /// Load bundled defaults overlaid with TOML text.
    pub fn from_toml_str(toml: &str) -> KalturaResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> KalturaResult<Self> {
        builder
            .build()
            .map_err(|e| {
                KalturaError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                KalturaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Check that everything the pipeline needs is present and well formed.
    ///
    /// Only the shape of `thumbnails_directory` is checked, not whether it
    /// exists.
    pub fn validate(&self) -> KalturaResult<()> {
        if let Some(field) = self.credentials().missing() {
            return Err(ConfigError::new(format!("{} must not be empty", field)).into());
        }

        let server = url::Url::parse(&self.server_url).map_err(|e| {
            ConfigError::new(format!("server_url {:?} is not a URL: {}", self.server_url, e))
        })?;
        if !matches!(server.scheme(), "http" | "https") {
            return Err(ConfigError::new(format!(
                "server_url must use http or https, got {}",
                server.scheme()
            ))
            .into());
        }

        self.validate_directory(&self.thumbnails_directory)?;

        if self.session.expiry_secs == 0 {
            return Err(ConfigError::new("session.expiry_secs must be positive").into());
        }
        if self.session.policy == SessionPolicy::Cached
            && self.session.refresh_margin_secs >= self.session.expiry_secs
        {
            return Err(ConfigError::new(format!(
                "session.refresh_margin_secs ({}) must be less than session.expiry_secs ({}) \
                 when session.policy is cached",
                self.session.refresh_margin_secs, self.session.expiry_secs
            ))
            .into());
        }

        Ok(())
    }

    /// Check that a thumbnail directory is a plain path or a URI with a
    /// registered scheme.
    pub fn validate_directory(&self, directory: &str) -> KalturaResult<()> {
        if directory.trim().is_empty() {
            return Err(ConfigError::new("thumbnails_directory must not be empty").into());
        }
        if directory.contains("://") {
            let (scheme, _) = split_uri(directory).ok_or_else(|| {
                ConfigError::new(format!("{} is not a valid path.", directory))
            })?;
            if !self.storage.schemes.contains_key(scheme) {
                return Err(ConfigError::new(format!(
                    "{} is not a valid path: scheme {} is not registered",
                    directory, scheme
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Credentials for starting admin sessions.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.server_url, &self.partner_id, &self.admin_secret)
    }

    /// A copy safe to print: the admin secret is masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.admin_secret.is_empty() {
            copy.admin_secret = "********".to_string();
        }
        copy
    }
}
