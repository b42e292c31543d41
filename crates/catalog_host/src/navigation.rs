//! Full-page navigation host-service contracts.

use std::{cell::RefCell, rc::Rc};

/// Host service that replaces the current page with another document.
pub trait PageNavigationService {
    /// Navigates the page to `href`.
    fn navigate_to(&self, href: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op navigation service for unsupported targets.
pub struct NoopPageNavigationService;

impl PageNavigationService for NoopPageNavigationService {
    fn navigate_to(&self, _href: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Navigation service that records requested addresses instead of leaving the page.
pub struct MemoryPageNavigationService {
    visited: Rc<RefCell<Vec<String>>>,
}

impl MemoryPageNavigationService {
    /// Returns every address navigated to, oldest first.
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl PageNavigationService for MemoryPageNavigationService {
    fn navigate_to(&self, href: &str) -> Result<(), String> {
        self.visited.borrow_mut().push(href.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_navigation_records_in_order() {
        let nav = MemoryPageNavigationService::default();
        let nav_obj: &dyn PageNavigationService = &nav;
        nav_obj.navigate_to("/product/1").expect("navigate");
        nav_obj.navigate_to("/product/2").expect("navigate");
        assert_eq!(nav.visited(), vec!["/product/1", "/product/2"]);
    }
}
