//! Projection of a detail record onto the modal's display fields.

use catalog_host::{expand_id_template, ProductDetail, QuickViewConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Presentation settings applied when projecting a record.
pub struct RenderOptions {
    /// Text written before the formatted price (for example `₹ `).
    pub currency_prefix: String,
    /// Full detail page template; `{id}` is replaced by the product id.
    pub detail_page_template: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&QuickViewConfig::default())
    }
}

impl From<&QuickViewConfig> for RenderOptions {
    fn from(config: &QuickViewConfig) -> Self {
        Self {
            currency_prefix: config.currency_prefix.clone(),
            detail_page_template: config.detail_page.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Interaction state of the seller contact link.
pub enum ContactAffordance {
    /// Clickable, full opacity.
    Interactive,
    /// Non-clickable, dimmed, `aria-disabled`.
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Values written into the modal for one record.
pub struct DetailView {
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub category: String,
    pub price_label: String,
    pub description: String,
    pub contact_href: String,
    pub contact: ContactAffordance,
    pub detail_href: String,
}

/// Formats `price` with two decimals after `prefix`.
///
/// Exact half-cent ties round away from zero, matching what the server-rendered pages show.
pub fn format_price(prefix: &str, price: f64) -> String {
    let scaled = price * 100.0;
    if (scaled - scaled.trunc()).abs() == 0.5 {
        let rounded = scaled.round() / 100.0;
        return format!("{prefix}{rounded:.2}");
    }
    format!("{prefix}{price:.2}")
}

/// Builds the modal field values for `detail`.
///
/// Only a `sold` status disables the contact link; every other status, including ones this client
/// does not know, leaves it interactive.
pub fn project_detail(detail: &ProductDetail, options: &RenderOptions) -> DetailView {
    let contact = if detail.status.is_sold() {
        ContactAffordance::Disabled
    } else {
        ContactAffordance::Interactive
    };

    DetailView {
        image_src: detail.image_url.clone(),
        image_alt: detail.name.clone(),
        title: detail.name.clone(),
        category: detail.category.clone(),
        price_label: format_price(&options.currency_prefix, detail.price),
        description: detail.description.clone(),
        contact_href: format!("mailto:{}", detail.seller_email),
        contact,
        detail_href: expand_id_template(&options.detail_page_template, detail.id.as_str()),
    }
}
