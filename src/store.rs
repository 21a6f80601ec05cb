//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The board is
//! only ever replaced as a whole, through `BoardCell::commit`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::BoardCell;
use crate::board::TaskRef;
use crate::models::Board;

/// Severity of a notice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

impl NoticeLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice info",
            NoticeLevel::Error => "notice error",
        }
    }
}

/// Transient, non-blocking message shown in the notice bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Canonical board, written only after the server confirms a change
    pub board: Board,
    /// Set once the initial fetch succeeded
    pub loaded: bool,
    /// Task waiting for the user to confirm its removal
    pub pending_removal: Option<TaskRef>,
    /// Notices currently on screen, oldest first
    pub notices: Vec<Notice>,
    pub next_notice_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

impl BoardCell for AppStore {
    fn snapshot(&self) -> Board {
        self.board().get_untracked()
    }

    fn commit(&self, board: Board) {
        *self.board().write() = board;
    }
}

// ========================
// Store Helper Functions
// ========================

/// Queue a notice; returns its id
pub fn store_push_notice(store: &AppStore, level: NoticeLevel, message: String) -> u32 {
    let id = store.next_notice_id().get_untracked();
    *store.next_notice_id().write() = id.wrapping_add(1);
    store.notices().write().push(Notice { id, level, message });
    id
}

/// Remove a notice by ID
pub fn store_dismiss_notice(store: &AppStore, notice_id: u32) {
    store.notices().write().retain(|notice| notice.id != notice_id);
}

pub fn store_set_pending_removal(store: &AppStore, task: Option<TaskRef>) {
    *store.pending_removal().write() = task;
}

/// Take the task awaiting confirmation, clearing it
pub fn store_take_pending_removal(store: &AppStore) -> Option<TaskRef> {
    store.pending_removal().write().take()
}
