use catalog_host::{
    DetailFetchError, DetailFuture, NoopPageNavigationService, NoopProductDetailService,
    PageNavigationService, ProductDetail, ProductDetailService, ProductId,
};

use crate::{WebPageNavigationService, WebProductDetailService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `catalog_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters (fetch, `window.location`).
    Browser,
    /// No-op adapters for headless builds that must not touch the network or the location bar.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Adapter enum that erases the concrete detail backend behind [`ProductDetailService`].
#[derive(Debug, Clone)]
pub enum ProductDetailServiceAdapter {
    /// Fetch-backed detail reads.
    Browser(WebProductDetailService),
    /// Detail reads that always report [`DetailFetchError::Unsupported`].
    Stub(NoopProductDetailService),
}

impl ProductDetailService for ProductDetailServiceAdapter {
    fn fetch_detail<'a>(
        &'a self,
        id: &'a ProductId,
    ) -> DetailFuture<'a, Result<ProductDetail, DetailFetchError>> {
        match self {
            Self::Browser(service) => service.fetch_detail(id),
            Self::Stub(service) => service.fetch_detail(id),
        }
    }
}

/// Adapter enum that erases the concrete navigation backend behind [`PageNavigationService`].
#[derive(Debug, Clone, Copy)]
pub enum PageNavigationServiceAdapter {
    /// `window.location` navigation.
    Browser(WebPageNavigationService),
    /// Navigation requests are accepted and dropped.
    Stub(NoopPageNavigationService),
}

impl PageNavigationService for PageNavigationServiceAdapter {
    fn navigate_to(&self, href: &str) -> Result<(), String> {
        match self {
            Self::Browser(service) => service.navigate_to(href),
            Self::Stub(service) => service.navigate_to(href),
        }
    }
}

/// Builds the detail service for the selected host strategy.
pub fn product_detail_service(endpoint_template: &str) -> ProductDetailServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            ProductDetailServiceAdapter::Browser(WebProductDetailService::new(endpoint_template))
        }
        HostStrategy::Stub => ProductDetailServiceAdapter::Stub(NoopProductDetailService),
    }
}

/// Builds the navigation service for the selected host strategy.
pub fn page_navigation_service() -> PageNavigationServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PageNavigationServiceAdapter::Browser(WebPageNavigationService),
        HostStrategy::Stub => PageNavigationServiceAdapter::Stub(NoopPageNavigationService),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "host-stub"))]
    #[test]
    fn default_build_selects_browser_adapters() {
        assert_eq!(selected_host_strategy(), HostStrategy::Browser);
        assert_eq!(host_strategy_name(), "browser");
        assert!(matches!(
            product_detail_service("/api/product/{id}"),
            ProductDetailServiceAdapter::Browser(_)
        ));
        assert!(matches!(
            page_navigation_service(),
            PageNavigationServiceAdapter::Browser(_)
        ));
    }
}
