//! Reducer actions, side-effect intents, and transition logic for the quick-view modal.

use catalog_host::{DetailFetchError, ProductDetail, ProductId};
use thiserror::Error;

use crate::model::{LoadTicket, ModalPhase, QuickViewState};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_quick_view`] to mutate [`QuickViewState`].
pub enum QuickViewAction {
    /// A card's open affordance was clicked.
    OpenFromCard {
        /// Card index in the snapshot, or `None` for a card that was not captured.
        position: Option<usize>,
        /// Product id read from the card.
        item_id: ProductId,
        /// The affordance's own link target, used if the first load fails.
        fallback_href: String,
    },
    /// Step through the snapshot (prev/next controls, arrow keys).
    Navigate {
        /// Signed step; wraps around both ends.
        delta: i64,
    },
    /// Backdrop, close button, or Escape.
    Close,
    /// A detail request completed.
    DetailLoaded {
        /// Request the response belongs to.
        ticket: LoadTicket,
        /// Fetched record.
        detail: ProductDetail,
    },
    /// A detail request failed.
    DetailFailed {
        /// Request the failure belongs to.
        ticket: LoadTicket,
        /// Underlying failure.
        error: DetailFetchError,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_quick_view`] for the host to execute in order.
pub enum QuickViewEffect {
    /// Read the detail record for `item_id`, then dispatch its completion action.
    FetchDetail {
        /// Request identity echoed back in the completion action.
        ticket: LoadTicket,
        /// Product to fetch.
        item_id: ProductId,
    },
    /// Write a record into the modal fields.
    RenderDetail(ProductDetail),
    /// Reveal the modal and lock page scrolling.
    ShowModal,
    /// Hide the modal and release the scroll lock.
    HideModal,
    /// Leave the page for a full detail document.
    NavigateTo(String),
    /// A response arrived for a request that is no longer awaited and was dropped.
    DiscardStale(LoadTicket),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference state the controller does not have.
pub enum QuickViewError {
    /// A card position outside the captured snapshot.
    #[error("card position {position} is outside the snapshot of {len} items")]
    PositionOutOfRange {
        /// Requested position.
        position: usize,
        /// Snapshot length.
        len: usize,
    },
}

/// Applies a [`QuickViewAction`] to the controller state and collects resulting side effects.
///
/// Arrow navigation and Escape only act while the modal is open. Only the response to the most
/// recently issued request is applied; anything else yields [`QuickViewEffect::DiscardStale`].
///
/// # Errors
///
/// Returns [`QuickViewError::PositionOutOfRange`] when a card position is not in the snapshot.
pub fn reduce_quick_view(
    state: &mut QuickViewState,
    action: QuickViewAction,
) -> Result<Vec<QuickViewEffect>, QuickViewError> {
    let mut effects = Vec::new();
    match action {
        QuickViewAction::OpenFromCard {
            position,
            item_id,
            fallback_href,
        } => {
            match position {
                Some(position) => {
                    if state
                        .cursor
                        .set_position(&state.snapshot, position)
                        .is_none()
                    {
                        return Err(QuickViewError::PositionOutOfRange {
                            position,
                            len: state.snapshot.len(),
                        });
                    }
                }
                None => state.cursor.clear(),
            }

            let ticket = state.issue_ticket();
            state.phase = if state.phase.is_open() {
                ModalPhase::Open {
                    pending: Some(ticket),
                }
            } else {
                ModalPhase::Loading {
                    ticket,
                    fallback_href,
                }
            };
            effects.push(QuickViewEffect::FetchDetail { ticket, item_id });
        }
        QuickViewAction::Navigate { delta } => {
            if !state.phase.is_open() {
                return Ok(effects);
            }
            let Some(item_id) = state.cursor.advance(&state.snapshot, delta).cloned() else {
                return Ok(effects);
            };
            let ticket = state.issue_ticket();
            state.phase = ModalPhase::Open {
                pending: Some(ticket),
            };
            effects.push(QuickViewEffect::FetchDetail { ticket, item_id });
        }
        QuickViewAction::Close => {
            if state.phase.is_open() {
                state.phase = ModalPhase::Closed;
                effects.push(QuickViewEffect::HideModal);
            }
        }
        QuickViewAction::DetailLoaded { ticket, detail } => {
            if state.phase.awaited_ticket() != Some(ticket) {
                effects.push(QuickViewEffect::DiscardStale(ticket));
                return Ok(effects);
            }
            let was_open = state.phase.is_open();
            state.phase = ModalPhase::Open { pending: None };
            state.displayed = Some(detail.id.clone());
            effects.push(QuickViewEffect::RenderDetail(detail));
            if !was_open {
                effects.push(QuickViewEffect::ShowModal);
            }
        }
        QuickViewAction::DetailFailed { ticket, .. } => {
            if state.phase.awaited_ticket() != Some(ticket) {
                effects.push(QuickViewEffect::DiscardStale(ticket));
                return Ok(effects);
            }
            match std::mem::take(&mut state.phase) {
                ModalPhase::Loading { fallback_href, .. } => {
                    effects.push(QuickViewEffect::NavigateTo(fallback_href));
                }
                ModalPhase::Open { .. } => {
                    // Mid-navigation failures keep the current content.
                    state.phase = ModalPhase::Open { pending: None };
                }
                ModalPhase::Closed => {}
            }
        }
    }

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use catalog_host::ListingStatus;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ItemSnapshot;

    fn state(ids: &[&str]) -> QuickViewState {
        QuickViewState::new(ids.iter().copied().map(ProductId::from).collect::<ItemSnapshot>())
    }

    fn detail(id: &str) -> ProductDetail {
        ProductDetail {
            id: ProductId::new(id),
            name: format!("Item {id}"),
            category: "books".to_string(),
            price: 10.0,
            description: String::new(),
            image_url: String::new(),
            seller_email: "s@college.edu".to_string(),
            status: ListingStatus::Available,
            created_at: None,
        }
    }

    fn open_card(state: &mut QuickViewState, position: usize, id: &str) -> LoadTicket {
        let effects = reduce_quick_view(
            state,
            QuickViewAction::OpenFromCard {
                position: Some(position),
                item_id: ProductId::new(id),
                fallback_href: format!("/product/{id}"),
            },
        )
        .expect("open card");
        match effects.as_slice() {
            [QuickViewEffect::FetchDetail { ticket, .. }] => *ticket,
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    fn fetched_ticket(effects: &[QuickViewEffect]) -> LoadTicket {
        match effects {
            [QuickViewEffect::FetchDetail { ticket, .. }] => *ticket,
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn card_click_loads_then_opens_with_render_before_show() {
        let mut state = state(&["1", "2"]);
        let ticket = open_card(&mut state, 1, "2");

        assert_eq!(state.cursor.position(), Some(1));
        assert_eq!(state.phase.label(), "loading");
        assert!(!state.phase.is_open());

        let effects = reduce_quick_view(
            &mut state,
            QuickViewAction::DetailLoaded {
                ticket,
                detail: detail("2"),
            },
        )
        .expect("loaded");

        assert_eq!(
            effects,
            vec![
                QuickViewEffect::RenderDetail(detail("2")),
                QuickViewEffect::ShowModal
            ]
        );
        assert!(state.phase.is_open());
        assert_eq!(state.displayed, Some(ProductId::new("2")));
    }

    #[test]
    fn initial_failure_redirects_to_card_link_and_stays_closed() {
        let mut state = state(&["42"]);
        let ticket = open_card(&mut state, 0, "42");

        let effects = reduce_quick_view(
            &mut state,
            QuickViewAction::DetailFailed {
                ticket,
                error: DetailFetchError::Status { status: 500 },
            },
        )
        .expect("failed");

        assert_eq!(
            effects,
            vec![QuickViewEffect::NavigateTo("/product/42".to_string())]
        );
        assert_eq!(state.phase, ModalPhase::Closed);
        assert_eq!(state.displayed, None);
    }

    #[test]
    fn navigation_failure_keeps_modal_open_without_effects() {
        let mut state = state(&["1", "2"]);
        let ticket = open_card(&mut state, 0, "1");
        reduce_quick_view(
            &mut state,
            QuickViewAction::DetailLoaded {
                ticket,
                detail: detail("1"),
            },
        )
        .expect("loaded");

        let effects =
            reduce_quick_view(&mut state, QuickViewAction::Navigate { delta: 1 }).expect("next");
        let next = fetched_ticket(&effects);
        let effects = reduce_quick_view(
            &mut state,
            QuickViewAction::DetailFailed {
                ticket: next,
                error: DetailFetchError::Transport("offline".to_string()),
            },
        )
        .expect("failed");

        assert!(effects.is_empty());
        assert_eq!(state.phase, ModalPhase::Open { pending: None });
        assert_eq!(state.displayed, Some(ProductId::new("1")));
    }

    #[test]
    fn navigate_and_close_are_ignored_unless_open() {
        let mut state = state(&["1", "2"]);
        assert!(reduce_quick_view(&mut state, QuickViewAction::Navigate { delta: 1 })
            .expect("navigate")
            .is_empty());
        assert!(reduce_quick_view(&mut state, QuickViewAction::Close)
            .expect("close")
            .is_empty());

        open_card(&mut state, 0, "1");
        assert!(reduce_quick_view(&mut state, QuickViewAction::Navigate { delta: 1 })
            .expect("navigate while loading")
            .is_empty());
        assert_eq!(state.cursor.position(), Some(0));
    }

    #[test]
    fn close_hides_modal_and_late_response_is_discarded() {
        let mut state = state(&["1", "2"]);
        let ticket = open_card(&mut state, 0, "1");
        reduce_quick_view(
            &mut state,
            QuickViewAction::DetailLoaded {
                ticket,
                detail: detail("1"),
            },
        )
        .expect("loaded");
        let pending =
            fetched_ticket(&reduce_quick_view(&mut state, QuickViewAction::Navigate { delta: 1 })
                .expect("next"));

        assert_eq!(
            reduce_quick_view(&mut state, QuickViewAction::Close).expect("close"),
            vec![QuickViewEffect::HideModal]
        );
        assert_eq!(
            reduce_quick_view(
                &mut state,
                QuickViewAction::DetailLoaded {
                    ticket: pending,
                    detail: detail("2"),
                },
            )
            .expect("late"),
            vec![QuickViewEffect::DiscardStale(pending)]
        );
        assert_eq!(state.phase, ModalPhase::Closed);
    }

    #[test]
    fn only_latest_navigation_response_is_rendered() {
        let mut state = state(&["1", "2", "3"]);
        let ticket = open_card(&mut state, 0, "1");
        reduce_quick_view(
            &mut state,
            QuickViewAction::DetailLoaded {
                ticket,
                detail: detail("1"),
            },
        )
        .expect("loaded");

        let first =
            fetched_ticket(&reduce_quick_view(&mut state, QuickViewAction::Navigate { delta: 1 })
                .expect("next"));
        let second =
            fetched_ticket(&reduce_quick_view(&mut state, QuickViewAction::Navigate { delta: 1 })
                .expect("next"));
        assert_eq!(first.position, Some(1));
        assert_eq!(second.position, Some(2));

        let rendered = reduce_quick_view(
            &mut state,
            QuickViewAction::DetailLoaded {
                ticket: second,
                detail: detail("3"),
            },
        )
        .expect("second");
        assert_eq!(rendered, vec![QuickViewEffect::RenderDetail(detail("3"))]);

        let stale = reduce_quick_view(
            &mut state,
            QuickViewAction::DetailLoaded {
                ticket: first,
                detail: detail("2"),
            },
        )
        .expect("first");
        assert_eq!(stale, vec![QuickViewEffect::DiscardStale(first)]);
        assert_eq!(state.displayed, Some(ProductId::new("3")));
    }

    #[test]
    fn card_outside_snapshot_opens_with_unset_cursor() {
        let mut state = state(&["1"]);
        let effects = reduce_quick_view(
            &mut state,
            QuickViewAction::OpenFromCard {
                position: None,
                item_id: ProductId::new("99"),
                fallback_href: "/product/99".to_string(),
            },
        )
        .expect("open");
        let ticket = fetched_ticket(&effects);
        assert_eq!(ticket.position, None);
        reduce_quick_view(
            &mut state,
            QuickViewAction::DetailLoaded {
                ticket,
                detail: detail("99"),
            },
        )
        .expect("loaded");

        assert!(reduce_quick_view(&mut state, QuickViewAction::Navigate { delta: 1 })
            .expect("navigate")
            .is_empty());
    }

    #[test]
    fn out_of_range_card_position_is_an_error() {
        let mut state = state(&["1"]);
        let err = reduce_quick_view(
            &mut state,
            QuickViewAction::OpenFromCard {
                position: Some(4),
                item_id: ProductId::new("1"),
                fallback_href: "/product/1".to_string(),
            },
        )
        .expect_err("out of range");
        assert_eq!(
            err,
            QuickViewError::PositionOutOfRange {
                position: 4,
                len: 1
            }
        );
        assert_eq!(state.phase, ModalPhase::Closed);
    }

    #[test]
    fn newer_card_click_supersedes_pending_first_load() {
        let mut state = state(&["1", "2"]);
        let first = open_card(&mut state, 0, "1");
        let second = open_card(&mut state, 1, "2");

        assert_eq!(
            reduce_quick_view(
                &mut state,
                QuickViewAction::DetailFailed {
                    ticket: first,
                    error: DetailFetchError::Status { status: 404 },
                },
            )
            .expect("stale failure"),
            vec![QuickViewEffect::DiscardStale(first)]
        );
        assert_eq!(state.phase.awaited_ticket(), Some(second));
    }
}
