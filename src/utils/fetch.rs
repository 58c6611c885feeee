//! Same-origin document fetches bounded by [`FETCH_TIMEOUT_MS`].

use js_sys::{Array, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// GET `url` and return the body as text.
///
/// A non-success status is reported as [`FetchError::HttpError`], which the
/// loaders render differently from transport failures.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::SameOrigin);
    let request =
        Request::new_with_str_and_init(url, &init).map_err(|_| FetchError::RequestCreationFailed)?;

    let response: Response = within_timeout(&window, window.fetch_with_request(&request), FETCH_TIMEOUT_MS)
        .await?
        .dyn_into()
        .map_err(|_| FetchError::InvalidContent)?;
    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let body = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(body)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)
}

/// Settle `pending` or fail with [`FetchError::Timeout`] after `ms`.
///
/// The timer resolves with `undefined`, which no fetch response can be.
async fn within_timeout(window: &Window, pending: Promise, ms: i32) -> Result<JsValue, FetchError> {
    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });

    let settled = JsFuture::from(Promise::race(&Array::of2(&pending, &timer)))
        .await
        .map_err(|e| FetchError::NetworkError(e.as_string().unwrap_or_else(|| format!("{:?}", e))))?;

    if settled.is_undefined() {
        Err(FetchError::Timeout)
    } else {
        Ok(settled)
    }
}
