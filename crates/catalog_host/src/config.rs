//! Page enhancement configuration.
//!
//! Pages may embed a JSON document in `<script type="application/json" id="catalog-enhance-config">`
//! to override selectors, templates, and presentation constants. Every section and field is
//! optional; omitted values keep the defaults below, which match the catalog's server templates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// DOM id of the embedded configuration element.
pub const CONFIG_ELEMENT_ID: &str = "catalog-enhance-config";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Configuration load failures.
pub enum ConfigError {
    /// The embedded document was not valid configuration JSON.
    #[error("invalid page config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Root configuration for every page enhancement subsystem.
pub struct PageConfig {
    /// Quick-view modal settings.
    pub quick_view: QuickViewConfig,
    /// Client-side grid filter settings.
    pub grid_filter: GridFilterConfig,
    /// Reveal-on-scroll settings.
    pub reveal: RevealConfig,
    /// Upload preview settings.
    pub upload: UploadConfig,
}

impl PageConfig {
    /// Parses an embedded configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `raw` is not a valid configuration object.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|err| ConfigError::Invalid(err.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Quick-view modal selectors, endpoint templates, and presentation constants.
pub struct QuickViewConfig {
    /// DOM id of the modal root.
    pub modal_id: String,
    /// Selector for the card grid receiving delegated clicks.
    pub grid_selector: String,
    /// Selector for the selectable cards captured into the navigation snapshot.
    pub card_selector: String,
    /// Selector for the open affordance inside a card.
    pub card_hit_selector: String,
    /// Selector used to climb from an open affordance to its card.
    pub card_root_selector: String,
    /// Attribute carrying a card's product id.
    pub id_attribute: String,
    /// Detail endpoint template; `{id}` is replaced by the product id.
    pub detail_endpoint: String,
    /// Full detail page template; `{id}` is replaced by the product id.
    pub detail_page: String,
    /// Prefix written before formatted prices.
    pub currency_prefix: String,
    /// Whether pointer movement over the modal media tilts the image.
    pub parallax: bool,
}

impl Default for QuickViewConfig {
    fn default() -> Self {
        Self {
            modal_id: "product-modal".to_string(),
            grid_selector: ".grid".to_string(),
            card_selector: ".grid .card[data-id]".to_string(),
            card_hit_selector: ".card-hit".to_string(),
            card_root_selector: ".card".to_string(),
            id_attribute: "data-id".to_string(),
            detail_endpoint: "/api/product/{id}".to_string(),
            detail_page: "/product/{id}".to_string(),
            currency_prefix: "₹ ".to_string(),
            parallax: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Grid filter form and card selectors.
pub struct GridFilterConfig {
    /// Selector for the search form root.
    pub form_selector: String,
    /// Selector for the cards toggled by the filter.
    pub card_selector: String,
}

impl Default for GridFilterConfig {
    fn default() -> Self {
        Self {
            form_selector: ".search-form".to_string(),
            card_selector: ".grid .card".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Reveal-on-scroll selectors and intersection threshold.
pub struct RevealConfig {
    /// Selector for elements revealed on first intersection.
    pub selector: String,
    /// Class added once an element has been revealed.
    pub shown_class: String,
    /// Visible fraction that counts as an intersection.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".reveal".to_string(),
            shown_class: "show".to_string(),
            threshold: 0.12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Upload dropzone element ids and classes.
pub struct UploadConfig {
    /// DOM id of the dropzone root.
    pub dropzone_id: String,
    /// DOM id of the file input submitted with the form.
    pub input_id: String,
    /// DOM id of the preview image.
    pub preview_id: String,
    /// Selector (within the dropzone) for the instructions hidden once a preview shows.
    pub instructions_selector: String,
    /// Class toggled on the dropzone while a drag hovers it.
    pub dragover_class: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dropzone_id: "dropzone".to_string(),
            input_id: "image-input".to_string(),
            preview_id: "image-preview".to_string(),
            instructions_selector: ".dz-instructions".to_string(),
            dragover_class: "dragover".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(PageConfig::from_json_str("  ").expect("empty"), PageConfig::default());
        assert_eq!(PageConfig::from_json_str("{}").expect("object"), PageConfig::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = PageConfig::from_json_str(
            r#"{"quick_view":{"currency_prefix":"$","parallax":false},"reveal":{"threshold":0.5}}"#,
        )
        .expect("partial");

        assert_eq!(config.quick_view.currency_prefix, "$");
        assert!(!config.quick_view.parallax);
        assert_eq!(config.quick_view.modal_id, "product-modal");
        assert_eq!(config.reveal.threshold, 0.5);
        assert_eq!(config.reveal.shown_class, "show");
        assert_eq!(config.upload, UploadConfig::default());
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = PageConfig::from_json_str("{quick_view:").expect_err("malformed");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
