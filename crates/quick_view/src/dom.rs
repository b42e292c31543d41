//! DOM binding for the quick-view modal (browser targets only).

use std::rc::Rc;

use catalog_host::{expand_id_template, PageSubsystem, ProductId, QuickViewConfig};
use catalog_host_web::{page_navigation_service, product_detail_service};
use leptos::{ev, logging, on_cleanup, window_event_listener};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use crate::{
    host::QuickViewHostContext,
    keyboard::action_for_key,
    model::ItemSnapshot,
    parallax::{parallax_transform, MediaRect},
    reducer::QuickViewAction,
    render::{ContactAffordance, DetailView, RenderOptions},
    runtime_context::{install_quick_view_runtime, QuickViewRuntimeContext},
    surface::ModalSurface,
};

const BACKDROP_SELECTOR: &str = ".modal-backdrop";
const CLOSE_SELECTOR: &str = ".modal-close";
const PREV_SELECTOR: &str = "[data-prev]";
const NEXT_SELECTOR: &str = "[data-next]";
const MEDIA_SELECTOR: &str = ".modal-media";
const IMAGE_ID: &str = "m-img";
const TITLE_ID: &str = "m-title";
const CATEGORY_ID: &str = "m-category";
const PRICE_ID: &str = "m-price";
const DESCRIPTION_ID: &str = "m-desc";
const CONTACT_ID: &str = "m-contact";
const VIEW_ID: &str = "m-view";

/// Quick-view modal as an optional page capability rooted at the modal element.
pub struct QuickViewSubsystem {
    config: QuickViewConfig,
}

impl QuickViewSubsystem {
    pub fn new(config: QuickViewConfig) -> Self {
        Self { config }
    }
}

impl PageSubsystem for QuickViewSubsystem {
    type Root = Element;

    fn name(&self) -> &'static str {
        "quick-view"
    }

    fn probe(&self) -> Option<Element> {
        document()?.get_element_by_id(&self.config.modal_id)
    }

    fn install(&self, modal: Element) {
        install(&self.config, modal);
    }
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn query(root: &Document, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn query_within(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
    if let Err(err) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        logging::warn!("failed to attach `{event}` listener: {err:?}");
    }
    closure.forget();
}

/// Captured cards paired with their ids, in DOM order.
fn capture_cards(document: &Document, config: &QuickViewConfig) -> Vec<(Element, ProductId)> {
    let Ok(nodes) = document.query_selector_all(&config.card_selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|card| {
            let id = card.get_attribute(&config.id_attribute)?;
            Some((card, ProductId::new(id)))
        })
        .collect()
}

fn install(config: &QuickViewConfig, modal: Element) {
    let Some(document) = document() else {
        return;
    };
    let Some(grid) = query(&document, &config.grid_selector) else {
        logging::log!(
            "quick view: no grid matches `{}`; modal left inert",
            config.grid_selector
        );
        return;
    };

    let (cards, ids): (Vec<Element>, Vec<ProductId>) =
        capture_cards(&document, config).into_iter().unzip();
    let surface = WebModalSurface::resolve(&document, modal.clone());
    let host = QuickViewHostContext::new(
        Rc::new(product_detail_service(&config.detail_endpoint)),
        Rc::new(page_navigation_service()),
        Rc::new(surface),
        RenderOptions::from(config),
    );
    let runtime = install_quick_view_runtime(ItemSnapshot::new(ids), host);

    for selector in [BACKDROP_SELECTOR, CLOSE_SELECTOR] {
        if let Some(element) = query_within(&modal, selector) {
            listen(&element, "click", move |_| {
                runtime.dispatch_action(QuickViewAction::Close);
            });
        }
    }
    for (selector, delta) in [(PREV_SELECTOR, -1), (NEXT_SELECTOR, 1)] {
        if let Some(element) = query_within(&modal, selector) {
            listen(&element, "click", move |_| {
                runtime.dispatch_action(QuickViewAction::Navigate { delta });
            });
        }
    }

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        let phase = runtime.state.get_untracked().phase;
        if let Some(action) = action_for_key(&ev.key(), &phase) {
            runtime.dispatch_action(action);
        }
    });
    on_cleanup(move || key_listener.remove());

    install_card_clicks(&grid, config, cards, runtime);

    if config.parallax {
        install_parallax(&document);
    }
}

fn install_card_clicks(
    grid: &Element,
    config: &QuickViewConfig,
    cards: Vec<Element>,
    runtime: QuickViewRuntimeContext,
) {
    let hit_selector = config.card_hit_selector.clone();
    let card_selector = config.card_root_selector.clone();
    let id_attribute = config.id_attribute.clone();
    let detail_page = config.detail_page.clone();

    listen(grid, "click", move |ev| {
        let Some(hit) = ev
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|target| target.closest(&hit_selector).ok().flatten())
        else {
            return;
        };
        let Some(card) = hit.closest(&card_selector).ok().flatten() else {
            return;
        };
        let Some(id) = card
            .get_attribute(&id_attribute)
            .filter(|id| !id.is_empty())
        else {
            return;
        };
        ev.prevent_default();

        let card_node: &web_sys::Node = &card;
        let position = cards
            .iter()
            .position(|candidate| candidate.is_same_node(Some(card_node)));
        let fallback_href = hit
            .get_attribute("href")
            .unwrap_or_else(|| expand_id_template(&detail_page, &id));
        runtime.dispatch_action(QuickViewAction::OpenFromCard {
            position,
            item_id: ProductId::new(id),
            fallback_href,
        });
    });
}

fn install_parallax(document: &Document) {
    let (Some(media), Some(image)) = (query(document, MEDIA_SELECTOR), html_by_id(document, IMAGE_ID))
    else {
        return;
    };

    let media_for_move = media.clone();
    let image_for_move = image.clone();
    listen(&media, "mousemove", move |ev| {
        let Some(pointer) = ev.dyn_ref::<web_sys::MouseEvent>() else {
            return;
        };
        let bounds = media_for_move.get_bounding_client_rect();
        let transform = parallax_transform(
            MediaRect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            },
            f64::from(pointer.client_x()),
            f64::from(pointer.client_y()),
        );
        let _ = image_for_move.style().set_property("transform", &transform);
    });
    listen(&media, "mouseleave", move |_| {
        let _ = image.style().remove_property("transform");
    });
}

/// Modal fields resolved once at install time; missing fields are skipped on write.
struct WebModalSurface {
    modal: Element,
    body: Option<HtmlElement>,
    image: Option<Element>,
    title: Option<Element>,
    category: Option<Element>,
    price: Option<Element>,
    description: Option<Element>,
    contact: Option<HtmlElement>,
    view: Option<Element>,
}

impl WebModalSurface {
    fn resolve(document: &Document, modal: Element) -> Self {
        Self {
            modal,
            body: document.body(),
            image: document.get_element_by_id(IMAGE_ID),
            title: document.get_element_by_id(TITLE_ID),
            category: document.get_element_by_id(CATEGORY_ID),
            price: document.get_element_by_id(PRICE_ID),
            description: document.get_element_by_id(DESCRIPTION_ID),
            contact: html_by_id(document, CONTACT_ID),
            view: document.get_element_by_id(VIEW_ID),
        }
    }
}

fn set_text(element: &Option<Element>, text: &str) {
    if let Some(element) = element {
        element.set_text_content(Some(text));
    }
}

fn set_attr(element: &Option<Element>, name: &str, value: &str) {
    if let Some(element) = element {
        let _ = element.set_attribute(name, value);
    }
}

impl ModalSurface for WebModalSurface {
    fn render(&self, view: &DetailView) {
        set_attr(&self.image, "src", &view.image_src);
        set_attr(&self.image, "alt", &view.image_alt);
        set_text(&self.title, &view.title);
        set_text(&self.category, &view.category);
        set_text(&self.price, &view.price_label);
        set_text(&self.description, &view.description);
        set_attr(&self.view, "href", &view.detail_href);

        let Some(contact) = &self.contact else {
            return;
        };
        let _ = contact.set_attribute("href", &view.contact_href);
        let style = contact.style();
        match view.contact {
            ContactAffordance::Disabled => {
                let _ = contact.set_attribute("aria-disabled", "true");
                let _ = style.set_property("pointer-events", "none");
                let _ = style.set_property("opacity", ".6");
            }
            ContactAffordance::Interactive => {
                let _ = contact.remove_attribute("aria-disabled");
                let _ = style.remove_property("pointer-events");
                let _ = style.remove_property("opacity");
            }
        }
    }

    fn set_open(&self, open: bool) {
        let _ = self
            .modal
            .set_attribute("aria-hidden", if open { "false" } else { "true" });
        let Some(body) = &self.body else {
            return;
        };
        if open {
            let _ = body.style().set_property("overflow", "hidden");
        } else {
            let _ = body.style().remove_property("overflow");
        }
    }
}
