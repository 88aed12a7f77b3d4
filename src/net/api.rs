//! HTTP calls to the analysis pipeline endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning errors, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outcomes instead of panics; failure
//! strings are already user-presentable (server `error` field when
//! available, status-derived fallback otherwise).

#![allow(clippy::unused_async)]

use super::types::VehicleRecord;
#[cfg(feature = "hydrate")]
use super::types::{error_from_body, parse_analysis};
#[cfg(feature = "hydrate")]
use serde_json::Value;

pub const UPLOAD_ENDPOINT: &str = "/upload";
pub const ANALYZE_ENDPOINT: &str = "/run-ocr";
pub const CLEAR_ENDPOINT: &str = "/clear-images";

/// Upload the staged image as a multipart form with a single `image` field.
///
/// # Errors
///
/// Returns a user-presentable reason on transport failure or a non-2xx
/// response; in that case nothing about the upload may be assumed durable.
#[cfg(feature = "hydrate")]
pub async fn upload_image(file: &web_sys::File) -> Result<(), String> {
    let form = web_sys::FormData::new().map_err(|_| "Could not build upload form.".to_owned())?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(|_| "Could not attach image to upload form.".to_owned())?;

    let resp = gloo_net::http::Request::post(UPLOAD_ENDPOINT)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        let body = resp.json::<Value>().await.unwrap_or(Value::Null);
        return Err(error_from_body(&body, resp.status()));
    }
    Ok(())
}

/// Run the server-side OCR + lookup pipeline against the uploaded image.
///
/// The request carries no payload; the server analyzes its latest upload.
///
/// # Errors
///
/// Returns the server's `error` reason when present, else a status-derived
/// message.
pub async fn run_analysis() -> Result<Vec<VehicleRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ANALYZE_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.ok() {
            let body = resp.json::<Value>().await.unwrap_or(Value::Null);
            return Err(error_from_body(&body, resp.status()));
        }

        let body = resp.json::<Value>().await.map_err(|e| e.to_string())?;
        parse_analysis(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available off-browser".to_owned())
    }
}

/// Ask the server to discard its uploaded images and intermediate results.
///
/// Returns the server's confirmation message when it provides one. The
/// caller treats failure as cosmetic: local state resets regardless.
///
/// # Errors
///
/// Returns a generic failure message on transport failure or non-2xx.
pub async fn clear_images() -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let failed = || "Failed to clear server images.".to_owned();
        let resp = gloo_net::http::Request::post(CLEAR_ENDPOINT)
            .send()
            .await
            .map_err(|_| failed())?;

        if !resp.ok() {
            return Err(failed());
        }

        #[derive(serde::Deserialize)]
        struct ClearResponse {
            message: Option<String>,
        }
        let message = resp
            .json::<ClearResponse>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.is_empty());
        Ok(message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available off-browser".to_owned())
    }
}
