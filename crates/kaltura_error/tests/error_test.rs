//! Tests for error conversion and location tracking.

use kaltura_error::{
    AuthenticationError, AuthenticationErrorKind, ConfigError, KalturaError, KalturaErrorKind,
    KalturaResult, StorageError, StorageErrorKind,
};

fn start_session(secret: &str) -> KalturaResult<String> {
    if secret.is_empty() {
        return Err(AuthenticationError::new(AuthenticationErrorKind::MissingCredential(
            "admin_secret".to_string(),
        ))
        .into());
    }
    Ok("djJ8MTAx".to_string())
}

#[test]
fn test_question_mark_converts_to_kaltura_error() {
    let err = start_session("").unwrap_err();
    match err.kind() {
        KalturaErrorKind::Authentication(e) => {
            assert_eq!(
                e.kind,
                AuthenticationErrorKind::MissingCredential("admin_secret".to_string())
            );
        }
        other => panic!("Expected authentication error, got {:?}", other),
    }
    assert!(start_session("s3cr3t").is_ok());
}

#[test]
fn test_location_is_recorded() {
    let err = StorageError::new(StorageErrorKind::FileWrite("/tmp/x.jpg".to_string()));
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
    assert!(err.to_string().contains("line"));
}

#[test]
fn test_display_chains_kind() {
    let err: KalturaError = ConfigError::new("partner_id must not be empty").into();
    let message = err.to_string();
    assert!(message.starts_with("Kaltura Error:"));
    assert!(message.contains("partner_id must not be empty"));
}
