//! REST client for the headless CMS
//!
//! Three calls, all over the browser fetch API:
//! - `GET {base}/items/{collection}` (gallery read)
//! - `POST {base}/items/{collection}` (create item)
//! - `POST {base}/files` (multipart photo upload)
//!
//! `JsValue` failures and non-ok statuses are converted into the
//! common [`Error`] type at this boundary.

use mineral_museum_common::{
    backend_error_message, ApiConfig, CatalogBackend, Error, FileUploadResponse, ItemsResponse,
    MineralRecord, NewMineral, Result,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// Fetches the full collection, in backend order. No filtering,
/// sorting, or pagination parameters are sent.
pub async fn fetch_minerals(config: &ApiConfig) -> Result<Vec<MineralRecord>> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&config.items_url(), &opts).map_err(network)?;
    let resp = send(&request).await?;

    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }

    let json = response_json(&resp).await?;
    let items: ItemsResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| Error::InvalidResponse(e.to_string()))?;
    Ok(items.data)
}

/// Creates one item. On rejection the backend's structured message is
/// preferred over the generic localized fallback.
pub async fn create_mineral(config: &ApiConfig, payload: &NewMineral) -> Result<()> {
    let body = serde_json::to_string(payload)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&config.items_url(), &opts).map_err(network)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(network)?;

    let resp = send(&request).await?;
    if !resp.ok() {
        let detail = read_error_detail(&resp)
            .await
            .unwrap_or_else(|| "Errore nel salvataggio".to_string());
        return Err(Error::Backend(detail));
    }
    Ok(())
}

/// Uploads one photo as the multipart form field `file` and returns
/// the file id the backend assigned.
pub async fn upload_photo(config: &ApiConfig, file: &File) -> Result<String> {
    let form = FormData::new().map_err(network)?;
    form.append_with_blob("file", file).map_err(network)?;

    // No Content-Type header: the browser sets the multipart boundary.
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(&config.files_url(), &opts).map_err(network)?;
    let resp = send(&request).await?;

    if !resp.ok() {
        return Err(Error::Backend(
            "Errore nel caricamento della foto".to_string(),
        ));
    }

    let json = response_json(&resp).await?;
    let uploaded: FileUploadResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| Error::InvalidResponse(e.to_string()))?;
    Ok(uploaded.data.id)
}

/// The live backend, as seen by the submission flow.
#[derive(Clone)]
pub struct DirectusBackend {
    config: ApiConfig,
}

impl DirectusBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl CatalogBackend for DirectusBackend {
    type Photo = File;

    async fn upload_photo(&self, photo: &File) -> Result<String> {
        upload_photo(&self.config, photo).await
    }

    async fn create_mineral(&self, payload: &NewMineral) -> Result<()> {
        create_mineral(&self.config, payload).await
    }
}

async fn send(request: &Request) -> Result<Response> {
    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(network)?;
    resp_value
        .dyn_into::<Response>()
        .map_err(|_| Error::InvalidResponse("fetch did not return a Response".to_string()))
}

async fn response_json(resp: &Response) -> Result<JsValue> {
    let promise = resp.json().map_err(network)?;
    JsFuture::from(promise).await.map_err(network)
}

/// Reads `errors[0].message` out of a rejected response body, when
/// the body is JSON and carries one.
async fn read_error_detail(resp: &Response) -> Option<String> {
    let promise = resp.text().ok()?;
    let text = JsFuture::from(promise).await.ok()?;
    backend_error_message(&text.as_string()?)
}

fn network(value: JsValue) -> Error {
    let detail = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Network(detail)
}
