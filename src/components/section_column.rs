//! Section Column Component
//!
//! One board column: its name, its task cards and (first column only) the
//! task adder.

use leptos::prelude::*;

use crate::app::AppDispatch;
use crate::components::{TaskAdder, TaskCard};
use crate::dispatch::{bind_task_dispatch, SectionDispatch};
use crate::layout::SectionConfig;
use crate::models::Task;

#[component]
pub fn SectionColumn(
    name: String,
    tasks: Memo<Vec<Task>>,
    config: SectionConfig,
    dispatch: SectionDispatch<AppDispatch>,
) -> impl IntoView {
    let capabilities = config.task;

    view! {
        <section class="section" data-index=dispatch.section_index().to_string()>
            <h2 class="section-name">{name}</h2>

            <div class="task-list">
                <For
                    each=move || tasks.get()
                    // Text is part of the key so a confirmed update re-renders the card
                    key=|task| (task.id, task.text.clone())
                    children=move |task| {
                        let task_dispatch = bind_task_dispatch(&dispatch, task.id);
                        view! {
                            <TaskCard
                                task=task
                                capabilities=capabilities
                                dispatch=task_dispatch
                            />
                        }
                    }
                />
            </div>

            {config.has_task_adder.then(|| view! { <TaskAdder dispatch=dispatch /> })}
        </section>
    }
}
