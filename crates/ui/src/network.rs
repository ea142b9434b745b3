use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Request, RequestCredentials, RequestInit, Response};

use settings_sync_protocol::{read_url, UpdateRequest, SETTINGS_ENDPOINT};

/// GET one stored setting, keyed by the control id.
///
/// Session credentials ride along and the body comes back as plain text.
/// An HTTP error status still resolves with whatever body the server sent,
/// mirroring fetch semantics: only transport-level failures are `Err`.
pub async fn fetch_setting(key: &str) -> Result<String, JsValue> {
    let win = window().ok_or("no window")?;

    let opts = RequestInit::new();
    opts.set_credentials(RequestCredentials::Include);
    let req = Request::new_with_str_and_init(&read_url(key), &opts)?;

    let resp_val = JsFuture::from(win.fetch_with_request(&req)).await?;
    let resp: Response = resp_val.dyn_into()?;
    let text_val = JsFuture::from(resp.text()?).await?;

    Ok(text_val.as_string().unwrap_or_default())
}

/// POST one settings update. The response is ignored entirely: no status
/// check, no body read, no retry.
pub async fn push_update(request: &UpdateRequest) -> Result<(), JsValue> {
    let win = window().ok_or("no window")?;
    let body = serde_json::to_string(request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_credentials(RequestCredentials::Include);
    opts.set_body(&JsValue::from_str(&body));
    let req = Request::new_with_str_and_init(SETTINGS_ENDPOINT, &opts)?;
    req.headers().set("Content-Type", "application/json")?;

    let _ = JsFuture::from(win.fetch_with_request(&req)).await?;
    Ok(())
}
