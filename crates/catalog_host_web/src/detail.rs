//! Fetch-backed product detail service.

use catalog_host::{
    decode_detail_body, expand_id_template, DetailFetchError, DetailFuture, ProductDetail,
    ProductDetailService, ProductId,
};

use crate::bridge;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Browser detail service issuing one `GET` per request against a templated endpoint.
pub struct WebProductDetailService {
    endpoint_template: String,
}

impl WebProductDetailService {
    /// Creates a service for `endpoint_template` (for example `/api/product/{id}`).
    pub fn new(endpoint_template: impl Into<String>) -> Self {
        Self {
            endpoint_template: endpoint_template.into(),
        }
    }

    /// Returns the endpoint address for `id`.
    pub fn endpoint_for(&self, id: &ProductId) -> String {
        expand_id_template(&self.endpoint_template, id.as_str())
    }
}

impl ProductDetailService for WebProductDetailService {
    fn fetch_detail<'a>(
        &'a self,
        id: &'a ProductId,
    ) -> DetailFuture<'a, Result<ProductDetail, DetailFetchError>> {
        Box::pin(async move {
            let url = self.endpoint_for(id);
            let response = bridge::http_get_text(&url)
                .await
                .map_err(DetailFetchError::Transport)?;
            if !response.is_success() {
                return Err(DetailFetchError::Status {
                    status: response.status,
                });
            }
            decode_detail_body(&response.body)
        })
    }
}
