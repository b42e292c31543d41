//! Reveal-on-scroll: marked elements gain a class the first time they intersect the viewport.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// One-shot reveal bookkeeping for a fixed list of observed elements.
pub struct RevealTracker {
    shown: Vec<bool>,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self {
            shown: vec![false; len],
        }
    }

    /// Records an intersection report for the element at `index`.
    ///
    /// Returns `true` only for the first intersecting report of each element; the caller then
    /// marks it shown and stops observing it. Repeated or non-intersecting reports return `false`.
    pub fn record(&mut self, index: usize, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.shown.get_mut(index) {
            Some(shown) if !*shown => {
                *shown = true;
                true
            }
            _ => false,
        }
    }

    pub fn shown_count(&self) -> usize {
        self.shown.iter().filter(|shown| **shown).count()
    }

    /// Returns `true` once every observed element has been revealed.
    pub fn is_complete(&self) -> bool {
        self.shown.iter().all(|shown| *shown)
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::{cell::RefCell, rc::Rc};

    use catalog_host::{PageSubsystem, RevealConfig};
    use leptos::logging;
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::{
        Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use super::RevealTracker;
    use crate::dom::{document, query_all};

    /// Reveal-on-scroll rooted at the set of marked elements.
    pub struct RevealSubsystem {
        config: RevealConfig,
    }

    impl RevealSubsystem {
        pub fn new(config: RevealConfig) -> Self {
            Self { config }
        }
    }

    impl PageSubsystem for RevealSubsystem {
        type Root = Vec<Element>;

        fn name(&self) -> &'static str {
            "reveal"
        }

        fn probe(&self) -> Option<Vec<Element>> {
            let elements = query_all::<Element>(&document()?, &self.config.selector);
            (!elements.is_empty()).then_some(elements)
        }

        fn install(&self, elements: Vec<Element>) {
            let shown_class = self.config.shown_class.clone();
            let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
            let observed = elements.clone();

            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::wrap(
                Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let mut tracker = tracker.borrow_mut();
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let target = entry.target();
                        let target_node: &web_sys::Node = &target;
                        let Some(index) = observed
                            .iter()
                            .position(|element| element.is_same_node(Some(target_node)))
                        else {
                            continue;
                        };
                        if tracker.record(index, entry.is_intersecting()) {
                            let _ = target.class_list().add_1(&shown_class);
                            observer.unobserve(&target);
                        }
                    }
                    if tracker.is_complete() {
                        observer.disconnect();
                    }
                }),
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&self.config.threshold.into());
            let observer = match IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => observer,
                Err(err) => {
                    logging::warn!("reveal: intersection observer unavailable: {err:?}");
                    return;
                }
            };
            callback.forget();

            for element in &elements {
                observer.observe(element);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::RevealSubsystem;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn each_element_is_revealed_exactly_once() {
        let mut tracker = RevealTracker::new(3);

        assert!(!tracker.record(1, false));
        assert!(tracker.record(1, true));
        assert!(!tracker.record(1, true));
        assert!(!tracker.record(1, true));
        assert_eq!(tracker.shown_count(), 1);
        assert!(!tracker.is_complete());

        assert!(tracker.record(0, true));
        assert!(tracker.record(2, true));
        assert!(tracker.is_complete());
        assert_eq!(tracker.shown_count(), 3);
    }

    #[test]
    fn reports_for_unknown_elements_are_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.record(5, true));
        assert_eq!(tracker.shown_count(), 0);
    }
}
