//! Page enhancements that sit beside the quick-view modal.
//!
//! Each enhancement is an optional capability: its browser binding implements
//! [`catalog_host::PageSubsystem`] and does nothing on pages that lack its root element. The
//! decision logic of each one lives in a pure core that is tested natively.

pub mod grid_filter;
pub mod reveal;
pub mod upload_preview;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use grid_filter::{apply_filter, CardFacets, FilterOutcome, FilterQuery};
#[cfg(target_arch = "wasm32")]
pub use grid_filter::GridFilterSubsystem;
pub use reveal::RevealTracker;
#[cfg(target_arch = "wasm32")]
pub use reveal::RevealSubsystem;
pub use upload_preview::{pick_first, DragClassChange, DropzoneEvent};
#[cfg(target_arch = "wasm32")]
pub use upload_preview::UploadPreviewSubsystem;
