//! Client-side text and category filtering over the pre-rendered card grid.
//!
//! Cards are captured once when the filter installs. Every keystroke in the query input and every
//! category change recomputes visibility for the whole set; there is no debounce.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Searchable text of one card, lowercased at capture time.
pub struct CardFacets {
    pub name: String,
    pub description: String,
    pub category: String,
}

impl CardFacets {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_lowercase(),
            description: description.into().to_lowercase(),
            category: category.into().to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Normalized filter inputs: trimmed and lowercased.
pub struct FilterQuery {
    text: String,
    category: String,
}

impl FilterQuery {
    pub fn new(text: &str, category: &str) -> Self {
        Self {
            text: text.trim().to_lowercase(),
            category: category.trim().to_lowercase(),
        }
    }

    /// Returns whether `card` passes both the text and the category condition.
    ///
    /// An empty text query matches every card; otherwise it must be a substring of the name,
    /// description, or category. An empty category matches every card; otherwise it must equal
    /// the card's category exactly.
    pub fn matches(&self, card: &CardFacets) -> bool {
        let text_ok = self.text.is_empty()
            || card.name.contains(&self.text)
            || card.description.contains(&self.text)
            || card.category.contains(&self.text);
        let category_ok = self.category.is_empty() || card.category == self.category;
        text_ok && category_ok
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of one filter pass, index-aligned with the captured cards.
pub struct FilterOutcome {
    pub visibility: Vec<bool>,
    pub visible_count: usize,
}

pub fn apply_filter(cards: &[CardFacets], query: &FilterQuery) -> FilterOutcome {
    let visibility: Vec<bool> = cards.iter().map(|card| query.matches(card)).collect();
    let visible_count = visibility.iter().filter(|visible| **visible).count();
    FilterOutcome {
        visibility,
        visible_count,
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::rc::Rc;

    use catalog_host::{GridFilterConfig, PageSubsystem};
    use leptos::logging;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

    use super::{apply_filter, CardFacets, FilterQuery};
    use crate::dom::{document, listen, query_all};

    const QUERY_INPUT_SELECTOR: &str = "input[name=\"q\"]";
    const CATEGORY_SELECT_SELECTOR: &str = "select[name=\"category\"]";

    /// Grid filter rooted at the search form.
    pub struct GridFilterSubsystem {
        config: GridFilterConfig,
    }

    impl GridFilterSubsystem {
        pub fn new(config: GridFilterConfig) -> Self {
            Self { config }
        }
    }

    struct FilterBinding {
        query_input: Option<HtmlInputElement>,
        category_select: Option<HtmlSelectElement>,
        cards: Vec<HtmlElement>,
        facets: Vec<CardFacets>,
    }

    impl FilterBinding {
        fn run(&self) {
            let text = self
                .query_input
                .as_ref()
                .map(HtmlInputElement::value)
                .unwrap_or_default();
            let category = self
                .category_select
                .as_ref()
                .map(HtmlSelectElement::value)
                .unwrap_or_default();
            let query = FilterQuery::new(&text, &category);
            let outcome = apply_filter(&self.facets, &query);

            for (card, visible) in self.cards.iter().zip(outcome.visibility) {
                let style = card.style();
                let _ = if visible {
                    style.remove_property("display").map(|_| ())
                } else {
                    style.set_property("display", "none")
                };
            }
            logging::log!(
                "grid filter: {} of {} cards visible",
                outcome.visible_count,
                self.cards.len()
            );
        }
    }

    fn facets_of(card: &HtmlElement) -> CardFacets {
        let attr = |name: &str| card.get_attribute(name).unwrap_or_default();
        CardFacets::new(attr("data-name"), attr("data-desc"), attr("data-category"))
    }

    impl PageSubsystem for GridFilterSubsystem {
        type Root = Element;

        fn name(&self) -> &'static str {
            "grid-filter"
        }

        fn probe(&self) -> Option<Element> {
            document()?
                .query_selector(&self.config.form_selector)
                .ok()
                .flatten()
        }

        fn install(&self, form: Element) {
            let Some(document) = document() else {
                return;
            };
            let query_input = form
                .query_selector(QUERY_INPUT_SELECTOR)
                .ok()
                .flatten()
                .and_then(|element| element.dyn_into::<HtmlInputElement>().ok());
            let category_select = form
                .query_selector(CATEGORY_SELECT_SELECTOR)
                .ok()
                .flatten()
                .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok());
            let cards = query_all::<HtmlElement>(&document, &self.config.card_selector);
            let facets = cards.iter().map(facets_of).collect();

            let binding = Rc::new(FilterBinding {
                query_input: query_input.clone(),
                category_select: category_select.clone(),
                cards,
                facets,
            });

            if let Some(input) = &query_input {
                let binding = binding.clone();
                listen(input, "input", move |_| binding.run());
            }
            if let Some(select) = &category_select {
                listen(select, "change", move |_| binding.run());
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::GridFilterSubsystem;
