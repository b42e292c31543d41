use super::*;

fn unsupported() -> String {
    "Browser APIs are only available when compiled for wasm32".to_string()
}

pub async fn http_get_text(_url: &str) -> Result<HttpText, String> {
    Err(unsupported())
}

pub fn assign_location(_href: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn element_text_by_id(_id: &str) -> Result<Option<String>, String> {
    Ok(None)
}
