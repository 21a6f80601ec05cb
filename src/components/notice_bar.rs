//! Notice Bar Component
//!
//! Non-blocking feedback: errors and rejected input show up here and fade
//! out on their own. Clicking a notice dismisses it early.

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notice-bar" aria-live="polite">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=notice.level.css_class()
                            role="status"
                            on:click=move |_| store_dismiss_notice(&store, id)
                        >
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
