//! Mock Kaltura API and HTTP fetcher.

use async_trait::async_trait;
use kaltura_core::{SessionStart, ThumbAsset};
use kaltura_error::{ApiError, ApiErrorKind, KalturaResult, TransportError, TransportErrorKind};
use kaltura_interface::{ApiResult, FetchedResponse, HttpFetcher, MediaApi};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock remote API with call counters.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockMediaApi {
    /// Reject every session start, as with a wrong admin secret
    pub reject_sessions: bool,
    /// Fail the asset listing call
    pub fail_listing: bool,
    /// Fail the URL call
    pub fail_url: bool,
    /// Assets returned for any entry
    pub assets: Vec<ThumbAsset>,
    /// URL template; `{n}` is replaced by the call number
    pub url: String,
    pub session_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub url_calls: AtomicUsize,
    pub seen_ks: Mutex<Vec<String>>,
    pub seen_asset_ids: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockMediaApi {
    /// Entry `12345` with one asset `987` at `http://cdn.example/thumb987.jpg`.
    pub fn scenario() -> Self {
        Self {
            assets: vec![ThumbAsset::new("987", "12345")],
            url: "http://cdn.example/thumb987.jpg".to_string(),
            ..Default::default()
        }
    }

    pub fn rejecting_sessions() -> Self {
        Self {
            reject_sessions: true,
            ..Self::scenario()
        }
    }

    pub fn sessions(&self) -> usize {
        self.session_calls.load(Ordering::SeqCst)
    }

    pub fn listings(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn url_lookups(&self) -> usize {
        self.url_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaApi for MockMediaApi {
    async fn start_session(&self, request: &SessionStart) -> ApiResult<String> {
        let n = self.session_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.reject_sessions {
            return Err(ApiError::new(ApiErrorKind::Api {
                code: "START_SESSION_ERROR".to_string(),
                message: format!(
                    "Error while starting session for partner [{}]",
                    request.partner_id()
                ),
            }));
        }
        Ok(format!("ks-{}", n))
    }

    async fn list_thumb_assets(&self, ks: &str, _entry_id: &str) -> ApiResult<Vec<ThumbAsset>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_ks.lock().unwrap().push(ks.to_string());
        if self.fail_listing {
            return Err(ApiError::new(ApiErrorKind::Api {
                code: "INVALID_KS".to_string(),
                message: "Invalid KS".to_string(),
            }));
        }
        Ok(self.assets.clone())
    }

    async fn thumb_asset_url(&self, _ks: &str, asset_id: &str) -> ApiResult<String> {
        let n = self.url_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.seen_asset_ids.lock().unwrap().push(asset_id.to_string());
        if self.fail_url {
            return Err(ApiError::new(ApiErrorKind::Status(503)));
        }
        Ok(self.url.replace("{n}", &n.to_string()))
    }
}

/// Mock fetcher serving one canned response.
#[allow(dead_code)]
pub struct MockFetcher {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    pub refuse: bool,
    pub calls: AtomicUsize,
    pub urls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockFetcher {
    pub fn ok(content_type: &str, body: &[u8]) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type.to_string()),
            body: body.to_vec(),
            refuse: false,
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            ..Self::ok("text/html", b"")
        }
    }

    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::ok("image/jpeg", b"")
        }
    }

    pub fn fetches(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpFetcher for MockFetcher {
    async fn get(&self, url: &str) -> KalturaResult<FetchedResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        if self.refuse {
            return Err(TransportError::new(TransportErrorKind::Request {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            })
            .into());
        }
        Ok(FetchedResponse::new(
            self.status,
            self.content_type.clone(),
            self.body.clone(),
        ))
    }
}
