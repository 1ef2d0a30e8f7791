//! HTTP client.
//!
//! Wraps `fetch` for the site config and the contact endpoint.

use crate::dom;
use async_trait::async_trait;
use folio_core::ContactSubmitter;
use folio_core::form::SubmitError;
use folio_types::{ContactPayload, ContactReceipt};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

async fn send(request: &Request) -> Result<Response, String> {
    let resp_value = JsFuture::from(dom::window().fetch_with_request(request))
        .await
        .map_err(|e| format!("fetch error: {:?}", e))?;

    resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response".to_string())
}

async fn read_text(resp: &Response) -> Result<String, String> {
    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("text error: {:?}", e))?;
    Ok(text.as_string().unwrap_or_default())
}

/// GET `url` and return the body. Non-2xx responses are errors.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;
    let resp = send(&request).await?;
    if !resp.ok() {
        return Err(format!("{} {}", resp.status(), resp.status_text()));
    }
    read_text(&resp).await
}

/// POST a JSON body, returning the status code and response text.
pub async fn post_json(url: &str, body: &str) -> Result<(u16, String), String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{:?}", e))?;
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;
    let resp = send(&request).await?;
    let text = read_text(&resp).await?;
    Ok((resp.status(), text))
}

/// Sends the contact payload to a real backend.
pub struct HttpSubmitter {
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl ContactSubmitter for HttpSubmitter {
    async fn submit(&self, payload: &ContactPayload) -> Result<ContactReceipt, SubmitError> {
        let body =
            serde_json::to_string(payload).map_err(|e| SubmitError::Transport(e.to_string()))?;
        let (status, text) = post_json(&self.endpoint, &body)
            .await
            .map_err(SubmitError::Transport)?;
        if !(200..300).contains(&status) {
            return Err(SubmitError::Rejected {
                status,
                message: text,
            });
        }
        serde_json::from_str(&text)
            .map_err(|e| SubmitError::Transport(format!("unreadable receipt: {}", e)))
    }
}
