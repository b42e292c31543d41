//! Embedded page configuration lookup.

use catalog_host::{ConfigError, PageConfig, CONFIG_ELEMENT_ID};

use crate::bridge;

/// Loads the page configuration from the embedded JSON element.
///
/// Pages without the element get [`PageConfig::default`].
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the element exists but its text is not valid config.
pub fn load_page_config() -> Result<PageConfig, ConfigError> {
    match bridge::element_text_by_id(CONFIG_ELEMENT_ID).map_err(ConfigError::Invalid)? {
        Some(raw) => PageConfig::from_json_str(&raw),
        None => Ok(PageConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_targets_fall_back_to_defaults() {
        assert_eq!(load_page_config().expect("defaults"), PageConfig::default());
    }
}
