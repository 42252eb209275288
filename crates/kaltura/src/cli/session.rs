//! Session check command handler.

use kaltura::{AdminSessionProvider, KalturaClient, KalturaConfig, KalturaResult, SessionProvider};
use std::sync::Arc;

/// Start an admin session and report who it is for and when it expires.
///
/// The session token itself is never printed.
pub async fn check_session(config: &KalturaConfig) -> KalturaResult<()> {
    config.validate()?;

    let api = Arc::new(KalturaClient::from_config(config)?);
    let provider = AdminSessionProvider::new(api, config.credentials(), config.session.expiry());
    let session = provider.session().await?;

    println!("Session started for partner {}", session.partner_id());
    println!("Expires at {}", session.expires_at().to_rfc3339());
    Ok(())
}
