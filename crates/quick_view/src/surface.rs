//! Modal display surface contracts.
//!
//! The host writes through this trait so effect execution can be exercised without a DOM.

use std::{cell::RefCell, rc::Rc};

use crate::render::DetailView;

/// Visible modal fields plus the page-level scroll lock.
pub trait ModalSurface {
    /// Writes `view` into the modal fields.
    fn render(&self, view: &DetailView);

    /// Shows or hides the modal; the scroll lock follows visibility.
    fn set_open(&self, open: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Write recorded by [`MemoryModalSurface`].
pub enum SurfaceEvent {
    Rendered(DetailView),
    Opened,
    Closed,
}

#[derive(Debug, Clone, Default)]
/// Surface that records writes and tracks visibility in memory.
pub struct MemoryModalSurface {
    events: Rc<RefCell<Vec<SurfaceEvent>>>,
}

impl MemoryModalSurface {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    /// Returns whether the last visibility write opened the modal.
    pub fn is_open(&self) -> bool {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|event| match event {
                SurfaceEvent::Opened => Some(true),
                SurfaceEvent::Closed => Some(false),
                SurfaceEvent::Rendered(_) => None,
            })
            .unwrap_or(false)
    }

    /// Returns the most recently rendered view.
    pub fn last_rendered(&self) -> Option<DetailView> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|event| match event {
                SurfaceEvent::Rendered(view) => Some(view.clone()),
                _ => None,
            })
    }
}

impl ModalSurface for MemoryModalSurface {
    fn render(&self, view: &DetailView) {
        self.events
            .borrow_mut()
            .push(SurfaceEvent::Rendered(view.clone()));
    }

    fn set_open(&self, open: bool) {
        self.events.borrow_mut().push(if open {
            SurfaceEvent::Opened
        } else {
            SurfaceEvent::Closed
        });
    }
}
