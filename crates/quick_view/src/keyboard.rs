//! Global keyboard policy for the quick-view modal.

use crate::{model::ModalPhase, reducer::QuickViewAction};

/// Maps a `KeyboardEvent.key` value to a modal action for the current phase.
///
/// The listener is attached to the whole window, so every key is ignored unless the modal is open.
pub fn action_for_key(key: &str, phase: &ModalPhase) -> Option<QuickViewAction> {
    if !phase.is_open() {
        return None;
    }
    match key {
        "Escape" => Some(QuickViewAction::Close),
        "ArrowLeft" => Some(QuickViewAction::Navigate { delta: -1 }),
        "ArrowRight" => Some(QuickViewAction::Navigate { delta: 1 }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::LoadTicket;

    #[test]
    fn open_modal_maps_escape_and_arrows() {
        let open = ModalPhase::Open { pending: None };
        assert_eq!(action_for_key("Escape", &open), Some(QuickViewAction::Close));
        assert_eq!(
            action_for_key("ArrowLeft", &open),
            Some(QuickViewAction::Navigate { delta: -1 })
        );
        assert_eq!(
            action_for_key("ArrowRight", &open),
            Some(QuickViewAction::Navigate { delta: 1 })
        );
        assert_eq!(action_for_key("Enter", &open), None);
    }

    #[test]
    fn keys_are_inert_unless_open() {
        let loading = ModalPhase::Loading {
            ticket: LoadTicket {
                sequence: 1,
                position: Some(0),
            },
            fallback_href: "/product/1".to_string(),
        };
        for phase in [ModalPhase::Closed, loading] {
            for key in ["Escape", "ArrowLeft", "ArrowRight"] {
                assert_eq!(action_for_key(key, &phase), None, "{key} in {}", phase.label());
            }
        }
    }
}
