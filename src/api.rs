//! Profile lookup against the site API, with mirror failover.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::model::{Profile, ProfileError, encode_id};

pub fn profile_url(base: &str, encoded_id: &str) -> String {
    format!("{}/api/users/{}", base.trim_end_matches('/'), encoded_id)
}

/// Fetch a profile by id, trying each mirror in order.
///
/// Only network-level failures move on to the next mirror. Any HTTP response
/// ends the search: a server that answered is authoritative.
pub async fn fetch_profile(mirrors: &[String], id: &str) -> Result<Profile, ProfileError> {
    if id.is_empty() {
        return Err(ProfileError::NotFound);
    }
    let window =
        web_sys::window().ok_or_else(|| ProfileError::Transient("no window".to_string()))?;
    let encoded = encode_id(id);

    let mut last_error = None;
    for base in mirrors {
        let url = profile_url(base, &encoded);
        log::info!("requesting profile from {url}");
        let resp = match send(&window, &url).await {
            Ok(resp) => resp,
            Err(e) => {
                let msg = js_error_message(&e);
                log::warn!("failed to reach {base}: {msg}, trying next mirror");
                last_error = Some(msg);
                continue;
            }
        };
        log::info!("response from {url}: {}", resp.status());
        return read_response(&resp).await;
    }

    let reason = last_error.unwrap_or_else(|| "no mirrors configured".to_string());
    log::error!("all API mirrors failed, last error: {reason}");
    Err(ProfileError::Transient(format!("connection failed: {reason}")))
}

async fn send(window: &web_sys::Window, url: &str) -> Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;
    let resp = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp.dyn_into::<Response>()
}

async fn read_response(resp: &Response) -> Result<Profile, ProfileError> {
    status_result(resp.status())?;
    let body = JsFuture::from(resp.text().map_err(transient)?)
        .await
        .map_err(transient)?
        .as_string()
        .unwrap_or_default();
    parse_profile(&body)
}

/// Maps a non-success HTTP status to its error class.
pub fn status_result(status: u16) -> Result<(), ProfileError> {
    match status {
        200 => Ok(()),
        404 => Err(ProfileError::NotFound),
        s => Err(ProfileError::Transient(format!("HTTP {s}"))),
    }
}

pub fn parse_profile(body: &str) -> Result<Profile, ProfileError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("malformed profile payload: {e}");
        ProfileError::Transient(format!("malformed response: {e}"))
    })
}

fn transient(e: JsValue) -> ProfileError {
    ProfileError::Transient(js_error_message(&e))
}

fn js_error_message(e: &JsValue) -> String {
    e.dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| e.as_string())
        .unwrap_or_else(|| format!("{e:?}"))
}
