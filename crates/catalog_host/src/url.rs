//! Address templates keyed by product id.

/// Placeholder replaced by the product id in endpoint and page templates.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Substitutes every `{id}` placeholder in `template` with `id`.
pub fn expand_id_template(template: &str, id: &str) -> String {
    template.replace(ID_PLACEHOLDER, id)
}
