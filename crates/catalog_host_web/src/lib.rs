//! Browser (`wasm32`) implementations of [`catalog_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for detail fetching, full-page
//! navigation, embedded configuration lookup, and file-to-data-URL decoding.
//!
//! Browser calls are routed through `bridge::interop`, which selects a wasm implementation or a
//! non-wasm shim so the adapters compile and test on native targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod config;
pub mod detail;
pub mod file_reader;
pub mod navigation;

pub use adapters::{
    host_strategy_name, page_navigation_service, product_detail_service, selected_host_strategy,
    HostStrategy, PageNavigationServiceAdapter, ProductDetailServiceAdapter,
};
pub use config::load_page_config;
pub use detail::WebProductDetailService;
#[cfg(target_arch = "wasm32")]
pub use file_reader::read_file_as_data_url;
pub use navigation::WebPageNavigationService;
