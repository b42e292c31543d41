//! Detail fetch service contracts and in-memory adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use thiserror::Error;

use super::types::{ProductDetail, ProductId};

/// Object-safe boxed future used by [`ProductDetailService`].
pub type DetailFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure to obtain a detail record.
///
/// Every variant is treated the same way by callers: no partial data is ever returned.
pub enum DetailFetchError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("detail endpoint returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// The request never produced a response (network failure, rejected fetch).
    #[error("detail request failed: {0}")]
    Transport(String),
    /// The response body was not a valid detail record.
    #[error("detail response was malformed: {0}")]
    Decode(String),
    /// Detail fetching is not available for the compiled target.
    #[error("detail fetching is only available when compiled for wasm32")]
    Unsupported,
}

/// Host service that reads a single product detail record.
///
/// Implementations perform exactly one read per call and hold no shared mutable state.
pub trait ProductDetailService {
    /// Fetches the detail record for `id`.
    fn fetch_detail<'a>(
        &'a self,
        id: &'a ProductId,
    ) -> DetailFuture<'a, Result<ProductDetail, DetailFetchError>>;
}

/// Decodes a raw detail endpoint body.
///
/// # Errors
///
/// Returns [`DetailFetchError::Decode`] when the body is not a valid detail record.
pub fn decode_detail_body(raw: &str) -> Result<ProductDetail, DetailFetchError> {
    serde_json::from_str(raw).map_err(|err| DetailFetchError::Decode(err.to_string()))
}

#[derive(Debug, Clone, Copy, Default)]
/// Detail service for targets without a network transport.
pub struct NoopProductDetailService;

impl ProductDetailService for NoopProductDetailService {
    fn fetch_detail<'a>(
        &'a self,
        _id: &'a ProductId,
    ) -> DetailFuture<'a, Result<ProductDetail, DetailFetchError>> {
        Box::pin(async { Err(DetailFetchError::Unsupported) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory detail service keyed by product id.
///
/// Unknown ids answer with a `404` status. Every request is recorded in call order.
pub struct MemoryProductDetailService {
    records: Rc<RefCell<HashMap<ProductId, ProductDetail>>>,
    requests: Rc<RefCell<Vec<ProductId>>>,
}

impl MemoryProductDetailService {
    /// Stores `detail` under its own id, replacing any previous record.
    pub fn insert(&self, detail: ProductDetail) {
        self.records.borrow_mut().insert(detail.id.clone(), detail);
    }

    /// Returns the ids requested so far, oldest first.
    pub fn requests(&self) -> Vec<ProductId> {
        self.requests.borrow().clone()
    }
}

impl ProductDetailService for MemoryProductDetailService {
    fn fetch_detail<'a>(
        &'a self,
        id: &'a ProductId,
    ) -> DetailFuture<'a, Result<ProductDetail, DetailFetchError>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(id.clone());
            self.records
                .borrow()
                .get(id)
                .cloned()
                .ok_or(DetailFetchError::Status { status: 404 })
        })
    }
}
