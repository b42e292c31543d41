//! Typed host-domain contracts shared by the catalog page enhancement crates.
//!
//! This crate is the API-first boundary between the quick-view runtime, the page enhancement
//! subsystems, and the browser adapters. It exposes the product detail record, the detail fetch
//! and page navigation service traits, the optional-capability mounting contract, and the page
//! configuration model. Concrete browser adapters live in `catalog_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod capability;
pub mod config;
pub mod detail;
pub mod navigation;
pub mod url;

pub use capability::{mount_subsystem, Capability, PageSubsystem};
pub use config::{
    ConfigError, GridFilterConfig, PageConfig, QuickViewConfig, RevealConfig, UploadConfig,
    CONFIG_ELEMENT_ID,
};
pub use detail::service::{
    decode_detail_body, DetailFetchError, DetailFuture, MemoryProductDetailService,
    NoopProductDetailService, ProductDetailService,
};
pub use detail::types::{ListingStatus, ProductDetail, ProductId};
pub use navigation::{MemoryPageNavigationService, NoopPageNavigationService, PageNavigationService};
pub use url::expand_id_template;
