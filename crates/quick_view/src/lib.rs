//! Quick-view modal for the catalog card grid.
//!
//! Clicking a card's open affordance fetches that listing's detail record and shows it in a modal
//! without leaving the page; arrow keys and the modal's prev/next controls walk the cards captured
//! at load time, wrapping at both ends. Failing to load the first record falls back to the card's
//! own detail page.
//!
//! State transitions live in [`reducer`]; [`host`] executes the effects they emit, and
//! [`runtime_context`] wires both into a Leptos reactive owner.

pub mod host;
pub mod keyboard;
pub mod loader;
pub mod model;
pub mod parallax;
pub mod reducer;
pub mod render;
pub mod runtime_context;
pub mod surface;

mod effect_executor;
#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::QuickViewSubsystem;
pub use host::{FetchRequest, QuickViewHostContext};
pub use model::{ItemSnapshot, LoadTicket, ModalPhase, NavigationCursor, QuickViewState};
pub use reducer::{reduce_quick_view, QuickViewAction, QuickViewEffect, QuickViewError};
pub use render::{format_price, project_detail, ContactAffordance, DetailView, RenderOptions};
pub use runtime_context::{install_quick_view_runtime, QuickViewRuntimeContext};
pub use surface::{MemoryModalSurface, ModalSurface, SurfaceEvent};
