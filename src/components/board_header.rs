//! Board Header Component
//!
//! App title, board name and the logout control.

use leptos::prelude::*;

use crate::config::APP_TITLE;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BoardHeader(on_logout: Callback<()>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <header class="board-header">
            <h1 class="app-title">{APP_TITLE}</h1>
            <h2 class="board-name">{move || store.board().read().name.clone()}</h2>
            <button class="logout-btn" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </header>
    }
}
