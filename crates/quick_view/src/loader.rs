//! Detail fetch driver that turns one request into its completion action.

use catalog_host::ProductDetailService;
use leptos::logging;

use crate::{host::FetchRequest, reducer::QuickViewAction};

/// Fetches the record for `request` and returns the action reporting the outcome.
///
/// Failures are logged here; the reducer decides whether they redirect or are ignored.
pub async fn load_detail<S: ProductDetailService + ?Sized>(
    service: &S,
    request: FetchRequest,
) -> QuickViewAction {
    let FetchRequest { ticket, item_id } = request;
    match service.fetch_detail(&item_id).await {
        Ok(detail) => QuickViewAction::DetailLoaded { ticket, detail },
        Err(error) => {
            logging::warn!(
                "quick view detail load failed for `{item_id}` (request {}): {error}",
                ticket.sequence
            );
            QuickViewAction::DetailFailed { ticket, error }
        }
    }
}

#[cfg(test)]
mod tests {
    use catalog_host::{
        DetailFetchError, ListingStatus, MemoryProductDetailService, ProductDetail, ProductId,
    };
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::LoadTicket;

    const TICKET: LoadTicket = LoadTicket {
        sequence: 3,
        position: Some(1),
    };

    #[test]
    fn success_and_failure_map_to_completion_actions() {
        let service = MemoryProductDetailService::default();
        let detail = ProductDetail {
            id: ProductId::new("5"),
            name: "Bike".to_string(),
            category: "sports".to_string(),
            price: 80.0,
            description: String::new(),
            image_url: String::new(),
            seller_email: "s@college.edu".to_string(),
            status: ListingStatus::Available,
            created_at: None,
        };
        service.insert(detail.clone());

        let loaded = block_on(load_detail(
            &service,
            FetchRequest {
                ticket: TICKET,
                item_id: ProductId::new("5"),
            },
        ));
        assert_eq!(
            loaded,
            QuickViewAction::DetailLoaded {
                ticket: TICKET,
                detail
            }
        );

        let failed = block_on(load_detail(
            &service,
            FetchRequest {
                ticket: TICKET,
                item_id: ProductId::new("6"),
            },
        ));
        assert_eq!(
            failed,
            QuickViewAction::DetailFailed {
                ticket: TICKET,
                error: DetailFetchError::Status { status: 404 }
            }
        );
    }
}
