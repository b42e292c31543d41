//! Host-side execution of reducer effects.
//!
//! Effects that touch the modal or the location bar run synchronously here. Fetches are handed
//! back to the caller as [`FetchRequest`] values so the runtime can spawn them and dispatch the
//! completion action.

use std::rc::Rc;

use catalog_host::{PageNavigationService, ProductDetailService, ProductId};
use leptos::logging;

use crate::{
    loader,
    model::LoadTicket,
    reducer::{QuickViewAction, QuickViewEffect},
    render::{project_detail, RenderOptions},
    surface::ModalSurface,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A detail read the runtime must perform.
pub struct FetchRequest {
    pub ticket: LoadTicket,
    pub item_id: ProductId,
}

#[derive(Clone)]
/// Host service bundle for quick-view side effects.
pub struct QuickViewHostContext {
    detail: Rc<dyn ProductDetailService>,
    navigation: Rc<dyn PageNavigationService>,
    surface: Rc<dyn ModalSurface>,
    render_options: RenderOptions,
}

impl QuickViewHostContext {
    pub fn new(
        detail: Rc<dyn ProductDetailService>,
        navigation: Rc<dyn PageNavigationService>,
        surface: Rc<dyn ModalSurface>,
        render_options: RenderOptions,
    ) -> Self {
        Self {
            detail,
            navigation,
            surface,
            render_options,
        }
    }

    /// Executes one effect. Returns the fetch to perform for [`QuickViewEffect::FetchDetail`].
    pub fn execute_effect(&self, effect: QuickViewEffect) -> Option<FetchRequest> {
        match effect {
            QuickViewEffect::FetchDetail { ticket, item_id } => {
                return Some(FetchRequest { ticket, item_id });
            }
            QuickViewEffect::RenderDetail(detail) => {
                self.surface
                    .render(&project_detail(&detail, &self.render_options));
            }
            QuickViewEffect::ShowModal => self.surface.set_open(true),
            QuickViewEffect::HideModal => self.surface.set_open(false),
            QuickViewEffect::NavigateTo(href) => {
                logging::warn!("quick view falling back to full detail page `{href}`");
                if let Err(err) = self.navigation.navigate_to(&href) {
                    logging::warn!("fallback navigation to `{href}` failed: {err}");
                }
            }
            QuickViewEffect::DiscardStale(ticket) => {
                logging::log!(
                    "quick view discarded stale detail response (request {})",
                    ticket.sequence
                );
            }
        }
        None
    }

    /// Performs `request` against the detail service.
    pub async fn fetch(&self, request: FetchRequest) -> QuickViewAction {
        loader::load_detail(self.detail.as_ref(), request).await
    }
}
