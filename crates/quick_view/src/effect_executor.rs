//! Effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::QuickViewRuntimeContext;

/// Installs the executor that drains reducer-emitted effects in order.
pub fn install(runtime: QuickViewRuntimeContext) {
    // Clear the queue before draining so completions dispatched during the drain enqueue a fresh
    // batch instead of being overwritten.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            let Some(request) = host.execute_effect(effect) else {
                continue;
            };
            let host = host.clone();
            spawn_local(async move {
                let action = host.fetch(request).await;
                runtime.dispatch_action(action);
            });
        }
    });
}
