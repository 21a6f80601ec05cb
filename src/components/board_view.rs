//! Board View Component
//!
//! Lays out the sections side by side above the width breakpoint and
//! stacked below it. Each section gets a dispatch bound to its own index.

use leptos::prelude::*;

use crate::app::AppDispatch;
use crate::components::SectionColumn;
use crate::context::use_app_context;
use crate::dispatch::bind_section_dispatch;
use crate::layout::{is_horizontal, section_width_percent, SectionConfig};
use crate::store::AppStateStoreFields;

#[component]
pub fn BoardView(dispatch: AppDispatch) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let layout = ctx.layout;

    let section_count = Memo::new(move |_| store.board().read().sections.len());

    let container_class = move || {
        if is_horizontal(ctx.viewport_width.get(), &layout) {
            "sections horizontal"
        } else {
            "sections stacked"
        }
    };
    let container_style = move || {
        if is_horizontal(ctx.viewport_width.get(), &layout) {
            "display: flex; flex-direction: row; justify-content: space-around;"
        } else {
            "display: flex; flex-direction: column; align-items: center;"
        }
    };
    let slot_style = move || {
        let width = section_width_percent(section_count.get(), ctx.viewport_width.get(), &layout);
        format!("width: {}%;", width)
    };

    view! {
        <div class=container_class style=container_style>
            <For
                each=move || {
                    store.board().read().sections.iter()
                        .enumerate()
                        .map(|(index, section)| (index, section.id, section.name.clone()))
                        .collect::<Vec<_>>()
                }
                key=|(index, id, _)| (*index, *id)
                children=move |(index, _, name)| {
                    let config = SectionConfig::for_position(index, section_count.get_untracked());
                    let tasks = Memo::new(move |_| {
                        store.board().read().sections.get(index)
                            .map(|section| section.tasks.clone())
                            .unwrap_or_default()
                    });
                    let section_dispatch = bind_section_dispatch(&dispatch, index);

                    view! {
                        <div class="section-slot" style=slot_style>
                            <SectionColumn
                                name=name
                                tasks=tasks
                                config=config
                                dispatch=section_dispatch
                            />
                        </div>
                    }
                }
            />
        </div>
    }
}
