//! Task Adder Component
//!
//! Bounded text input for creating a task in its section.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::actions::validate_task_text;
use crate::app::AppDispatch;
use crate::components::CharCounter;
use crate::context::use_app_context;
use crate::dispatch::SectionDispatch;
use crate::forms::after_add;

/// Form for adding a task; keeps its text until the server accepted it
#[component]
pub fn TaskAdder(dispatch: SectionDispatch<AppDispatch>) -> impl IntoView {
    let ctx = use_app_context();
    let max = ctx.text_max_length;

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if let Err(err) = validate_task_text(&text, max) {
            ctx.report(&err);
            return;
        }
        dispatch.add_task(text, move |added| {
            set_new_text.update(|current| *current = after_add(std::mem::take(current), added));
        });
    };

    view! {
        <form class="task-adder" on:submit=add_task>
            <input
                type="text"
                placeholder="New task..."
                maxlength=max.to_string()
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <CharCounter text=new_text max=max />
            <button type="submit">"Add task"</button>
        </form>
    }
}
