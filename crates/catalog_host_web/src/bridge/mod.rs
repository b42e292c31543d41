//! Browser capability bridge used by the `catalog_host_web` adapters.
//!
//! Adapters call these functions instead of touching `web_sys` directly so the non-wasm shim can
//! answer on native targets.

mod interop;

pub use interop::HttpText;

pub async fn http_get_text(url: &str) -> Result<HttpText, String> {
    interop::http_get_text(url).await
}

pub fn assign_location(href: &str) -> Result<(), String> {
    interop::assign_location(href)
}

pub fn element_text_by_id(id: &str) -> Result<Option<String>, String> {
    interop::element_text_by_id(id)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn bridge_public_api_non_wasm_parity() {
        let expected = "Browser APIs are only available when compiled for wasm32".to_string();

        assert_eq!(
            block_on(http_get_text("/api/product/1")).expect_err("fetch should fail"),
            expected
        );
        assert_eq!(
            assign_location("/product/1").expect_err("navigation should fail"),
            expected
        );
        assert_eq!(element_text_by_id("catalog-enhance-config").expect("lookup"), None);
    }
}
