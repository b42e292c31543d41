//! Shared transport interop for browser bridge calls.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Status and body of a completed HTTP GET.
///
/// `body` is only read for success statuses and is empty otherwise.
pub struct HttpText {
    pub status: u16,
    pub body: String,
}

impl HttpText {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub async fn http_get_text(url: &str) -> Result<HttpText, String> {
    imp::http_get_text(url).await
}

pub fn assign_location(href: &str) -> Result<(), String> {
    imp::assign_location(href)
}

pub fn element_text_by_id(id: &str) -> Result<Option<String>, String> {
    imp::element_text_by_id(id)
}
