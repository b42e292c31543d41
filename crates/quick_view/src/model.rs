use catalog_host::ProductId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Ordered product ids captured once from the rendered grid.
///
/// The snapshot is never refreshed for the lifetime of a page view, so cards hidden later by the
/// grid filter remain reachable through prev/next traversal.
pub struct ItemSnapshot {
    items: Vec<ProductId>,
}

impl ItemSnapshot {
    pub fn new(items: Vec<ProductId>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&ProductId> {
        self.items.get(position)
    }
}

impl FromIterator<ProductId> for ItemSnapshot {
    fn from_iter<T: IntoIterator<Item = ProductId>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Position of the open item within an [`ItemSnapshot`], or unset before any card was opened.
pub struct NavigationCursor {
    position: Option<usize>,
}

impl NavigationCursor {
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Moves the cursor to `position` and returns the id stored there.
    ///
    /// Positions outside the snapshot (including any position in an empty snapshot) leave the
    /// cursor unchanged and return `None`.
    pub fn set_position<'s>(
        &mut self,
        snapshot: &'s ItemSnapshot,
        position: usize,
    ) -> Option<&'s ProductId> {
        let id = snapshot.get(position)?;
        self.position = Some(position);
        Some(id)
    }

    /// Forgets the current position.
    pub fn clear(&mut self) {
        self.position = None;
    }

    /// Moves the cursor by `delta`, wrapping in both directions, and returns the id it lands on.
    ///
    /// Returns `None` without moving when the cursor is unset or the snapshot is empty.
    pub fn advance<'s>(&mut self, snapshot: &'s ItemSnapshot, delta: i64) -> Option<&'s ProductId> {
        let current = self.position?;
        if snapshot.is_empty() {
            return None;
        }
        let len = snapshot.len() as i64;
        let next = (current as i64 + delta).rem_euclid(len) as usize;
        self.position = Some(next);
        snapshot.get(next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Identity of one detail request.
///
/// `sequence` increases with every request issued by the controller; `position` is the cursor
/// position at dispatch time (`None` for cards outside the snapshot).
pub struct LoadTicket {
    pub sequence: u64,
    pub position: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Modal lifecycle.
///
/// A failed first load leaves the page through a redirect instead of entering a visible error
/// state, so no error phase is stored.
pub enum ModalPhase {
    /// Modal hidden, page scrollable.
    #[default]
    Closed,
    /// First record for a card is in flight; the modal is still hidden.
    Loading {
        ticket: LoadTicket,
        /// Card link target used if the request fails.
        fallback_href: String,
    },
    /// Modal visible with scroll locked. `pending` tracks an in-place content replacement.
    Open { pending: Option<LoadTicket> },
}

impl ModalPhase {
    /// Returns `true` while the modal is visible (and page scrolling is locked).
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Returns the ticket whose response the controller is waiting for, if any.
    pub fn awaited_ticket(&self) -> Option<LoadTicket> {
        match self {
            Self::Closed => None,
            Self::Loading { ticket, .. } => Some(*ticket),
            Self::Open { pending } => *pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Loading { .. } => "loading",
            Self::Open { .. } => "open",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Complete quick-view controller state.
pub struct QuickViewState {
    pub snapshot: ItemSnapshot,
    pub cursor: NavigationCursor,
    pub phase: ModalPhase,
    /// Id of the record currently written into the modal.
    pub displayed: Option<ProductId>,
    last_sequence: u64,
}

impl QuickViewState {
    pub fn new(snapshot: ItemSnapshot) -> Self {
        Self {
            snapshot,
            ..Self::default()
        }
    }

    /// Issues a fresh ticket stamped with the current cursor position.
    pub(crate) fn issue_ticket(&mut self) -> LoadTicket {
        self.last_sequence += 1;
        LoadTicket {
            sequence: self.last_sequence,
            position: self.cursor.position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn snapshot(ids: &[&str]) -> ItemSnapshot {
        ids.iter().copied().map(ProductId::from).collect()
    }

    #[test]
    fn advance_wraps_in_both_directions() {
        let items = snapshot(&["A", "B", "C"]);
        let mut cursor = NavigationCursor::default();
        assert_eq!(cursor.set_position(&items, 0), Some(&ProductId::from("A")));

        assert_eq!(cursor.advance(&items, 1), Some(&ProductId::from("B")));
        assert_eq!(cursor.advance(&items, 1), Some(&ProductId::from("C")));
        assert_eq!(cursor.advance(&items, 1), Some(&ProductId::from("A")));
        assert_eq!(cursor.position(), Some(0));
        assert_eq!(cursor.advance(&items, -1), Some(&ProductId::from("C")));
        assert_eq!(cursor.position(), Some(2));
    }

    #[test]
    fn advance_handles_multi_wrap_deltas() {
        let items = snapshot(&["A", "B", "C"]);
        let mut cursor = NavigationCursor::default();
        cursor.set_position(&items, 1);

        assert_eq!(cursor.advance(&items, 7), Some(&ProductId::from("C")));
        assert_eq!(cursor.advance(&items, -8), Some(&ProductId::from("A")));
        assert_eq!(cursor.advance(&items, 0), Some(&ProductId::from("A")));
    }

    #[test]
    fn position_stays_in_range_for_any_unit_step_sequence() {
        for len in 1..=5usize {
            let items: ItemSnapshot = (0..len).map(|i| ProductId::new(i.to_string())).collect();
            let mut cursor = NavigationCursor::default();
            cursor.set_position(&items, len - 1);
            for step in 0..40u32 {
                let delta = if (step * 7 + len as u32) % 3 == 0 { -1 } else { 1 };
                cursor.advance(&items, delta);
                let position = cursor.position().expect("cursor set");
                assert!(position < len, "position {position} escaped len {len}");
            }
        }
    }

    #[test]
    fn empty_snapshot_and_unset_cursor_decline() {
        let empty = ItemSnapshot::default();
        let mut cursor = NavigationCursor::default();
        assert_eq!(cursor.set_position(&empty, 0), None);
        assert_eq!(cursor.advance(&empty, 1), None);
        assert_eq!(cursor.position(), None);

        let items = snapshot(&["A"]);
        assert_eq!(cursor.advance(&items, 1), None);
        assert_eq!(cursor.set_position(&items, 3), None);
        assert_eq!(cursor.position(), None);
    }

    #[test]
    fn tickets_are_stamped_with_cursor_position() {
        let mut state = QuickViewState::new(snapshot(&["A", "B"]));
        state.cursor.set_position(&state.snapshot.clone(), 1);
        let first = state.issue_ticket();
        let second = state.issue_ticket();
        assert_eq!(first.position, Some(1));
        assert!(second.sequence > first.sequence);
    }
}
