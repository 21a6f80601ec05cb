//! Remove Confirm Component
//!
//! Inline confirmation for the task waiting to be removed. Nothing is sent
//! to the server until the user picks Remove.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Confirmation bar for a pending task removal
///
/// # Arguments
/// * `on_confirm` - Runs when the user confirms the removal
/// * `on_cancel` - Runs when the user backs out
#[component]
pub fn RemoveConfirm(on_confirm: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let store = use_app_store();

    let pending_text = move || {
        let task = store.pending_removal().get()?;
        store.board().read().task(task.task_id).map(|t| t.text.clone())
    };

    view! {
        <Show when=move || store.pending_removal().get().is_some()>
            <div class="remove-confirm" role="dialog">
                <span class="remove-confirm-text">
                    {move || format!("Remove task \"{}\"?", pending_text().unwrap_or_default())}
                </span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "Remove"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_cancel.run(());
                    }
                >
                    "Cancel"
                </button>
            </div>
        </Show>
    }
}
