//! Kanban Frontend App
//!
//! Root component: owns the canonical board and implements the board-level
//! dispatch handed down to sections and tasks.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions::BoardActions;
use crate::api::ApiClient;
use crate::board::TaskRef;
use crate::components::{BoardHeader, BoardView, NoticeBar, RemoveConfirm};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::dispatch::BoardDispatch;
use crate::store::{
    store_set_pending_removal, store_take_pending_removal, AppState, AppStateStoreFields, AppStore, NoticeLevel,
};

/// Board-level dispatch backed by the store and the HTTP client
#[derive(Clone, Copy)]
pub struct AppDispatch {
    ctx: AppContext,
    api: StoredValue<ApiClient>,
    logout_redirect: StoredValue<String>,
}

impl AppDispatch {
    pub fn new(ctx: AppContext, config: &AppConfig) -> Self {
        Self {
            ctx,
            api: StoredValue::new(ApiClient::new(&config.api)),
            logout_redirect: StoredValue::new(config.api.logout_redirect.clone()),
        }
    }

    fn store(&self) -> AppStore {
        self.ctx.store
    }

    /// Fetch the board from the server
    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            let api = this.api.get_value();
            let store = this.store();
            let actions = BoardActions::new(&api, &store, this.ctx.text_max_length);
            match actions.fetch_board().await {
                Ok(()) => *store.loaded().write() = true,
                Err(err) => this.ctx.report(&err),
            }
        });
    }

    /// The user confirmed the pending removal
    pub fn confirm_removal(&self) {
        let Some(task) = store_take_pending_removal(&self.store()) else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let api = this.api.get_value();
            let store = this.store();
            let actions = BoardActions::new(&api, &store, this.ctx.text_max_length);
            match actions.remove_task(task, true).await {
                Ok(()) => this.ctx.notify(NoticeLevel::Info, "Task removed".to_string()),
                Err(err) => this.ctx.report(&err),
            }
        });
    }

    pub fn cancel_removal(&self) {
        if let Some(task) = store_take_pending_removal(&self.store()) {
            log::debug!("removal of task #{} cancelled", task.task_id);
        }
    }

    /// End the session and leave the page
    pub fn logout(&self) {
        let this = *self;
        spawn_local(async move {
            let api = this.api.get_value();
            let store = this.store();
            let actions = BoardActions::new(&api, &store, this.ctx.text_max_length);
            match actions.logout(&this.logout_redirect.get_value()).await {
                Ok(url) => {
                    let navigated = web_sys::window().map(|win| win.location().set_href(&url));
                    if !matches!(navigated, Some(Ok(()))) {
                        log::error!("could not navigate to {}", url);
                    }
                }
                Err(err) => this.ctx.report(&err),
            }
        });
    }
}

impl BoardDispatch for AppDispatch {
    fn add_task<F>(&self, section_index: usize, text: String, on_settled: F)
    where
        F: FnOnce(bool) + 'static,
    {
        let this = *self;
        spawn_local(async move {
            let api = this.api.get_value();
            let store = this.store();
            let actions = BoardActions::new(&api, &store, this.ctx.text_max_length);
            match actions.add_task(section_index, &text).await {
                Ok(_) => on_settled(true),
                Err(err) => {
                    this.ctx.report(&err);
                    on_settled(false);
                }
            }
        });
    }

    fn promote(&self, task: TaskRef) {
        let this = *self;
        spawn_local(async move {
            let api = this.api.get_value();
            let store = this.store();
            let actions = BoardActions::new(&api, &store, this.ctx.text_max_length);
            if let Err(err) = actions.promote_task(task).await {
                this.ctx.report(&err);
            }
        });
    }

    fn demote(&self, task: TaskRef) {
        let this = *self;
        spawn_local(async move {
            let api = this.api.get_value();
            let store = this.store();
            let actions = BoardActions::new(&api, &store, this.ctx.text_max_length);
            if let Err(err) = actions.demote_task(task).await {
                this.ctx.report(&err);
            }
        });
    }

    fn remove(&self, task: TaskRef) {
        store_set_pending_removal(&self.store(), Some(task));
    }

    fn update(&self, task: TaskRef, text: String) {
        let this = *self;
        spawn_local(async move {
            let api = this.api.get_value();
            let store = this.store();
            let actions = BoardActions::new(&api, &store, this.ctx.text_max_length);
            if let Err(err) = actions.update_task(task, &text).await {
                this.ctx.report(&err);
            }
        });
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store: AppStore = Store::new(AppState::default());
    let (viewport, set_viewport) = signal(viewport_width());

    let _ = window_event_listener(ev::resize, move |_| set_viewport.set(viewport_width()));

    // Provide context to all children
    let ctx = AppContext::new(store, viewport, &config);
    provide_context(store);
    provide_context(ctx);

    let dispatch = AppDispatch::new(ctx, &config);

    // Load board on mount
    Effect::new(move |_| {
        dispatch.load();
    });

    view! {
        <div class="app-layout">
            <BoardHeader on_logout=Callback::new(move |_| dispatch.logout()) />

            <NoticeBar />

            <Show when=move || !store.loaded().get()>
                <p class="board-loading">"Loading board..."</p>
            </Show>

            <BoardView dispatch=dispatch />

            <RemoveConfirm
                on_confirm=Callback::new(move |_| dispatch.confirm_removal())
                on_cancel=Callback::new(move |_| dispatch.cancel_removal())
            />
        </div>
    }
}
