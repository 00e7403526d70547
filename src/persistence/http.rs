//! Minimal fetch helpers over `web_sys`

use planejaqui_core::{PersistError, PersistResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::js_error;

/// Status code and body text of a finished request
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail with the status and body unless the request succeeded
    pub fn into_body(self) -> PersistResult<String> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(PersistError::Transport(format!("HTTP {}: {}", self.status, self.body)))
        }
    }
}

pub async fn get(url: &str) -> PersistResult<Reply> {
    send("GET", url, None).await
}

pub async fn post_json(url: &str, body: &str) -> PersistResult<Reply> {
    send("POST", url, Some(body)).await
}

async fn send(method: &str, url: &str, body: Option<&str>) -> PersistResult<Reply> {
    let transport = |e: JsValue| PersistError::Transport(js_error(e));

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(transport)?;
    }

    let window = web_sys::window().ok_or_else(|| PersistError::Unavailable("no window".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;

    let text = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?;

    Ok(Reply {
        status: response.status(),
        body: text.as_string().unwrap_or_default(),
    })
}
