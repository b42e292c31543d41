use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::*;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

pub async fn http_get_text(url: &str) -> Result<HttpText, String> {
    let window = window()?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| format!("fetch `{url}` rejected: {err:?}"))?
        .dyn_into::<web_sys::Response>()
        .map_err(|_| "fetch resolved to a non-Response value".to_string())?;

    let status = response.status();
    if !response.ok() {
        return Ok(HttpText {
            status,
            body: String::new(),
        });
    }

    let text = response
        .text()
        .map_err(|err| format!("failed to read response body: {err:?}"))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|err| format!("response body stream failed: {err:?}"))?
        .as_string()
        .ok_or_else(|| "response body was not text".to_string())?;

    Ok(HttpText { status, body })
}

pub fn assign_location(href: &str) -> Result<(), String> {
    window()?
        .location()
        .set_href(href)
        .map_err(|err| format!("failed to navigate to `{href}`: {err:?}"))
}

pub fn element_text_by_id(id: &str) -> Result<Option<String>, String> {
    let document = window()?
        .document()
        .ok_or_else(|| "document unavailable".to_string())?;
    Ok(document
        .get_element_by_id(id)
        .and_then(|element| element.text_content()))
}
