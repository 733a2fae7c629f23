//! Same-origin manifest fetching.
//!
//! The gallery manifest is fetched with a plain `GET` raced against a
//! timer, so a stalled request surfaces as [`FetchError::Timeout`] instead
//! of leaving the grid empty forever. [`HttpManifestSource`] is the
//! browser-side [`ManifestSource`] the gallery loader runs with.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::ManifestSource;
use crate::core::error::FetchError;
use crate::models::Manifest;

// =============================================================================
// Timeout Race
// =============================================================================

/// Outcome of racing a promise against a timer.
#[derive(Debug)]
pub enum RaceResult {
    /// Settled first with this value
    Completed(JsValue),
    /// The timer fired first
    TimedOut,
    /// Rejected; carries the rejection message
    Error(String),
}

/// Best-effort text of a rejection value.
fn rejection_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// Settle `promise` or give up after `timeout_ms`.
///
/// The timer resolves to `undefined`, which is how a timeout is told apart
/// from a completed fetch (a `Response` is never `undefined`).
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });
    let contenders = Array::of2(&promise, &timer);

    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(value) if value.is_undefined() => RaceResult::TimedOut,
        Ok(value) => RaceResult::Completed(value),
        Err(e) => RaceResult::Error(rejection_message(&e)),
    }
}

// =============================================================================
// Fetching
// =============================================================================

/// `GET` a same-origin JSON document and deserialize it.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let body = fetch_text(url).await?;
    serde_json::from_str(&body).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Response body of a same-origin `GET`, bounded by `FETCH_TIMEOUT_MS`.
///
/// Non-2xx statuses map to [`FetchError::HttpError`].
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::SameOrigin);
    let request =
        Request::new_with_str_and_init(url, &init).map_err(|_| FetchError::RequestCreationFailed)?;

    let pending = window.fetch_with_request(&request);
    let response: Response = match race_with_timeout(pending, FETCH_TIMEOUT_MS).await {
        RaceResult::Completed(value) => {
            value.dyn_into().map_err(|_| FetchError::InvalidContent)?
        }
        RaceResult::TimedOut => return Err(FetchError::Timeout),
        RaceResult::Error(msg) => return Err(FetchError::NetworkError(msg)),
    };
    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let text_promise = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;
    text.as_string().ok_or(FetchError::InvalidContent)
}

// =============================================================================
// Manifest Source
// =============================================================================

/// Fetches the gallery manifest from the site's own origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpManifestSource;

impl ManifestSource for HttpManifestSource {
    async fn fetch_manifest(&self, url: &str) -> Result<Manifest, FetchError> {
        fetch_json(url).await
    }
}
