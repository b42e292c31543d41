use leptos::logging;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Event, EventTarget};

pub(crate) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Collects every match of `selector` that casts to `T`, in document order.
pub(crate) fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Attaches `handler` for the page's lifetime.
pub(crate) fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
    if let Err(err) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        logging::warn!("failed to attach `{event}` listener: {err:?}");
    }
    closure.forget();
}
