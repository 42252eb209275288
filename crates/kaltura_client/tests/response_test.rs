//! Tests for api_v3 response decoding.

use kaltura_client::{ThumbAssetDto, parse_response};
use kaltura_core::ThumbAsset;
use kaltura_error::ApiErrorKind;

#[test]
fn test_thumb_asset_list_decodes_in_service_order() {
    let body = r#"[
        {"id":"0_t2","entryId":"0_abc123","width":640,"height":360,"fileExt":"jpg","objectType":"KalturaThumbAsset"},
        {"id":"0_t1","entryId":"0_abc123","width":120,"height":90,"fileExt":"","objectType":"KalturaThumbAsset"}
    ]"#;

    let dtos: Vec<ThumbAssetDto> = parse_response(body).unwrap();
    let assets: Vec<ThumbAsset> = dtos.into_iter().map(ThumbAsset::from).collect();

    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].id(), "0_t2");
    assert_eq!(assets[0].entry_id(), "0_abc123");
    assert_eq!(*assets[0].width(), Some(640));
    assert_eq!(assets[0].file_ext().as_deref(), Some("jpg"));
    assert_eq!(assets[1].id(), "0_t1");
    assert_eq!(*assets[1].file_ext(), None);
}

#[test]
fn test_empty_list_decodes() {
    let dtos: Vec<ThumbAssetDto> = parse_response("[]").unwrap();
    assert!(dtos.is_empty());
}

#[test]
fn test_missing_optional_fields() {
    let dtos: Vec<ThumbAssetDto> = parse_response(r#"[{"id":"987"}]"#).unwrap();
    assert_eq!(dtos[0].id, "987");
    assert!(dtos[0].entry_id.is_empty());
    assert_eq!(dtos[0].width, None);
}

#[test]
fn test_exception_payload_is_api_error() {
    let body = r#"{
        "code":"START_SESSION_ERROR",
        "message":"Error while starting session for partner [101]",
        "objectType":"KalturaAPIException",
        "args":{"PARTNER_ID":"101"}
    }"#;

    let err = parse_response::<String>(body).unwrap_err();
    assert_eq!(
        err.kind,
        ApiErrorKind::Api {
            code: "START_SESSION_ERROR".to_string(),
            message: "Error while starting session for partner [101]".to_string(),
        }
    );
}

#[test]
fn test_exception_payload_wins_over_expected_shape() {
    let body = r#"{"code":"INVALID_KS","message":"Invalid KS","objectType":"KalturaAPIException"}"#;
    let err = parse_response::<Vec<ThumbAssetDto>>(body).unwrap_err();
    assert!(matches!(err.kind, ApiErrorKind::Api { .. }));
}

#[test]
fn test_malformed_body_is_deserialization_error() {
    let err = parse_response::<String>("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err.kind, ApiErrorKind::Deserialization(_)));

    let err = parse_response::<String>(r#"{"objectType":"KalturaThumbAsset"}"#).unwrap_err();
    assert!(matches!(err.kind, ApiErrorKind::Deserialization(_)));
}
