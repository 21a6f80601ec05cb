//! Character Counter Component
//!
//! Remaining-length hint shown under bounded text fields.

use leptos::prelude::*;

use crate::layout::remaining_chars;

/// Live "characters remaining" counter for a bounded text field
#[component]
pub fn CharCounter(#[prop(into)] text: Signal<String>, max: usize) -> impl IntoView {
    let remaining = move || text.with(|t| remaining_chars(t, max));

    view! {
        <span class=move || if remaining() == 0 { "char-counter exhausted" } else { "char-counter" }>
            {move || format!("{} characters remaining", remaining())}
        </span>
    }
}
