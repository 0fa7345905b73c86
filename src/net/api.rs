//! REST API helpers for reading the backend collections.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the collections are
//! only read from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>` so callers can log the failure
//! at the component boundary and degrade without crashing hydration. No
//! helper retries or times out on its own.

#![allow(clippy::unused_async)]

use super::types::{Course, InstituteInfo, Student};

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("{url} failed: {}", resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch every course from `/api/courses`.
pub async fn fetch_courses() -> Result<Vec<Course>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/courses").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch every student from `/api/students`.
pub async fn fetch_students() -> Result<Vec<Student>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/students").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch every message from `/api/messages`.
///
/// Messages are opaque to this layer; only the collection size is consumed,
/// so the records stay untyped JSON.
pub async fn fetch_messages() -> Result<Vec<serde_json::Value>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/messages").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch institute metadata from `/api/public/institute-info`.
pub async fn fetch_institute_info() -> Result<InstituteInfo, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/public/institute-info").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
