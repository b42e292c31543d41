//! `window.location` navigation adapter.

use catalog_host::PageNavigationService;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser navigation service that assigns `window.location.href`.
pub struct WebPageNavigationService;

impl PageNavigationService for WebPageNavigationService {
    fn navigate_to(&self, href: &str) -> Result<(), String> {
        bridge::assign_location(href)
    }
}
