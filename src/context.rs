//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::{AppConfig, LayoutConfig};
use crate::error::ActionError;
use crate::store::{store_dismiss_notice, store_push_notice, AppStore, NoticeLevel};

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Current `window.innerWidth`, kept up to date on resize
    pub viewport_width: ReadSignal<f64>,
    pub layout: LayoutConfig,
    pub text_max_length: usize,
    notice_ttl_ms: u32,
}

impl AppContext {
    pub fn new(store: AppStore, viewport_width: ReadSignal<f64>, config: &AppConfig) -> Self {
        Self {
            store,
            viewport_width,
            layout: config.layout,
            text_max_length: config.text_max_length,
            notice_ttl_ms: config.notice_ttl_ms,
        }
    }

    /// Show a notice that goes away on its own
    pub fn notify(&self, level: NoticeLevel, message: String) {
        let store = self.store;
        let ttl = self.notice_ttl_ms;
        let id = store_push_notice(&store, level, message);
        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            store_dismiss_notice(&store, id);
        });
    }

    /// Log a failed action and tell the user about it
    pub fn report(&self, err: &ActionError) {
        if err.is_validation() {
            log::debug!("rejected locally: {}", err);
        } else {
            log::warn!("action failed: {}", err);
        }
        self.notify(NoticeLevel::Error, err.to_string());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
