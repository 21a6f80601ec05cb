//! Task Card Component
//!
//! One task, in Display or Edit mode. Every action goes through the bound
//! task dispatch; success or failure of the request is the root's concern.

use leptos::prelude::*;

use crate::app::AppDispatch;
use crate::components::CharCounter;
use crate::context::use_app_context;
use crate::dispatch::TaskDispatch;
use crate::forms::{card_step, display_controls, CardControl, CardEffect, CardEvent, CardMode};
use crate::layout::TaskCapabilities;
use crate::models::Task;

#[component]
pub fn TaskCard(
    task: Task,
    capabilities: TaskCapabilities,
    dispatch: TaskDispatch<AppDispatch>,
) -> impl IntoView {
    let ctx = use_app_context();
    let max = ctx.text_max_length;

    let mode = RwSignal::new(CardMode::Display);
    let editing = Memo::new(move |_| mode.with(CardMode::is_editing));
    let draft = Memo::new(move |_| mode.with(|m| m.draft().unwrap_or_default().to_string()));
    let text = StoredValue::new(task.text);

    let fire = move |event: CardEvent| {
        let (next, effect) = card_step(mode.get_untracked(), event, &text.get_value(), capabilities, max);
        mode.set(next);
        match effect {
            CardEffect::None => {}
            CardEffect::Update(new_text) => dispatch.update(new_text),
            CardEffect::Rejected(err) => ctx.report(&err),
        }
    };

    let on_control = move |control: CardControl| match control {
        CardControl::Edit => fire(CardEvent::StartEdit),
        CardControl::Remove => dispatch.remove(),
        CardControl::Demote => dispatch.demote(),
        CardControl::Promote => dispatch.promote(),
    };

    view! {
        <div class="task" data-task-id=dispatch.task().task_id.to_string()>
            {move || if editing.get() {
                view! {
                    <div class="task-edit">
                        <textarea
                            class="task-editor"
                            maxlength=max.to_string()
                            prop:value=move || draft.get()
                            on:input=move |ev| fire(CardEvent::Input(event_target_value(&ev)))
                        ></textarea>
                        <CharCounter text=draft max=max />
                        <div class="task-actions">
                            <button class="task-btn cancel" on:click=move |_| fire(CardEvent::Cancel)>"Cancel"</button>
                            <button class="task-btn update" on:click=move |_| fire(CardEvent::Submit)>"Update"</button>
                        </div>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="task-display">
                        <p class="task-text">{text.get_value()}</p>
                        <div class="task-actions">
                            {display_controls(capabilities)
                                .into_iter()
                                .map(|control| view! {
                                    <button class=control.class() on:click=move |_| on_control(control)>
                                        {control.label()}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
