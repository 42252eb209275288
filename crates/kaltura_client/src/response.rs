//! Decoding of `api_v3` JSON responses.

use kaltura_error::{ApiError, ApiErrorKind};
use kaltura_interface::ApiResult;
use serde::de::DeserializeOwned;
use serde_json::Value;

const EXCEPTION_OBJECT_TYPE: &str = "KalturaAPIException";

/// Decode a response body, surfacing `KalturaAPIException` payloads as
/// [`ApiErrorKind::Api`].
///
/// The service reports API errors with HTTP 200, so the body has to be
/// inspected before it can be trusted.
///
/// # Examples
///
/// ```
/// use kaltura_client::parse_response;
/// use kaltura_error::ApiErrorKind;
///
/// let ks: String = parse_response(r#""djJ8MTAxfA==""#).unwrap();
/// assert_eq!(ks, "djJ8MTAxfA==");
///
/// let err = parse_response::<String>(
///     r#"{"code":"INVALID_KS","message":"Invalid KS","objectType":"KalturaAPIException"}"#,
/// )
/// .unwrap_err();
/// assert!(matches!(err.kind, ApiErrorKind::Api { ref code, .. } if code == "INVALID_KS"));
/// ```
pub fn parse_response<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ApiError::new(ApiErrorKind::Deserialization(e.to_string())))?;

    if let Some(kind) = exception_kind(&value) {
        return Err(ApiError::new(kind));
    }

    serde_json::from_value(value)
        .map_err(|e| ApiError::new(ApiErrorKind::Deserialization(e.to_string())))
}

fn exception_kind(value: &Value) -> Option<ApiErrorKind> {
    let object = value.as_object()?;
    if object.get("objectType").and_then(Value::as_str) != Some(EXCEPTION_OBJECT_TYPE) {
        return None;
    }
    let field = |name: &str| {
        object
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    Some(ApiErrorKind::Api {
        code: field("code"),
        message: field("message"),
    })
}
