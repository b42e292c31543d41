//! Runtime context wiring for the quick-view controller.
//!
//! This module owns the reducer container and the effect queue inside the current Leptos owner.
//! DOM listeners live in `dom` and only ever dispatch actions.

use leptos::*;

use crate::{
    effect_executor,
    host::QuickViewHostContext,
    model::{ItemSnapshot, QuickViewState},
    reducer::{reduce_quick_view, QuickViewAction, QuickViewEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading quick-view state and dispatching [`QuickViewAction`] values.
pub struct QuickViewRuntimeContext {
    /// Host service bundle for executing effects.
    pub host: StoredValue<QuickViewHostContext>,
    /// Reactive controller state.
    pub state: RwSignal<QuickViewState>,
    /// Queue of effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<QuickViewEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<QuickViewAction>,
}

impl QuickViewRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: QuickViewAction) {
        self.dispatch.call(action);
    }
}

/// Creates the controller for `snapshot` and starts the effect executor.
///
/// Must run inside a reactive owner (for example a component body).
pub fn install_quick_view_runtime(
    snapshot: ItemSnapshot,
    host: QuickViewHostContext,
) -> QuickViewRuntimeContext {
    let host = store_value(host);
    let state = create_rw_signal(QuickViewState::new(snapshot));
    let effects = create_rw_signal(Vec::<QuickViewEffect>::new());

    let dispatch = Callback::new(move |action: QuickViewAction| {
        let mut next = state.get_untracked();
        let previous = next.clone();

        match reduce_quick_view(&mut next, action) {
            Ok(new_effects) => {
                if next != previous {
                    state.set(next);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("quick view reducer error: {err}"),
        }
    });

    let runtime = QuickViewRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    effect_executor::install(runtime);

    runtime
}
