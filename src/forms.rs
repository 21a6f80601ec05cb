//! Form State
//!
//! Pure rules behind the task adder and the task card's Display/Edit modes.
//! The components only wire these to signals and dispatch.

use crate::actions::validate_task_text;
use crate::error::ActionError;
use crate::layout::TaskCapabilities;

/// Adder input once an add request settled: cleared on success, kept otherwise
pub fn after_add(text: String, added: bool) -> String {
    if added {
        String::new()
    } else {
        text
    }
}

/// Buttons a task card can show in Display mode, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardControl {
    Edit,
    Remove,
    Demote,
    Promote,
}

impl CardControl {
    pub fn label(self) -> &'static str {
        match self {
            CardControl::Edit => "Edit",
            CardControl::Remove => "Remove",
            CardControl::Demote => "Demote",
            CardControl::Promote => "Promote",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            CardControl::Edit => "task-btn edit",
            CardControl::Remove => "task-btn remove",
            CardControl::Demote => "task-btn demote",
            CardControl::Promote => "task-btn promote",
        }
    }
}

/// Controls permitted by `caps`
pub fn display_controls(caps: TaskCapabilities) -> Vec<CardControl> {
    [
        (caps.editable, CardControl::Edit),
        (caps.removable, CardControl::Remove),
        (caps.demotable, CardControl::Demote),
        (caps.promotable, CardControl::Promote),
    ]
    .into_iter()
    .filter_map(|(allowed, control)| allowed.then_some(control))
    .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CardMode {
    #[default]
    Display,
    Edit {
        draft: String,
    },
}

impl CardMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, CardMode::Edit { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            CardMode::Edit { draft } => Some(draft),
            CardMode::Display => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEvent {
    StartEdit,
    Input(String),
    Cancel,
    Submit,
}

/// What the card must do after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum CardEffect {
    None,
    Update(String),
    Rejected(ActionError),
}

/// Advance the card. `text` is the task's current text.
pub fn card_step(
    mode: CardMode,
    event: CardEvent,
    text: &str,
    caps: TaskCapabilities,
    max: usize,
) -> (CardMode, CardEffect) {
    match (mode, event) {
        (CardMode::Display, CardEvent::StartEdit) if caps.editable => {
            (CardMode::Edit { draft: text.to_string() }, CardEffect::None)
        }
        (CardMode::Edit { .. }, CardEvent::Input(draft)) => (CardMode::Edit { draft }, CardEffect::None),
        (CardMode::Edit { .. }, CardEvent::Cancel) => (CardMode::Display, CardEffect::None),
        (CardMode::Edit { draft }, CardEvent::Submit) => match validate_task_text(&draft, max) {
            Ok(()) => (CardMode::Display, CardEffect::Update(draft)),
            Err(err) => (CardMode::Edit { draft }, CardEffect::Rejected(err)),
        },
        (mode, _) => (mode, CardEffect::None),
    }
}
