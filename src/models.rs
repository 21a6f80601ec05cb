//! Frontend Models
//!
//! Data structures matching the board server's JSON payloads.

use serde::{Deserialize, Serialize};

pub type BoardId = u32;
pub type SectionId = u32;
pub type TaskId = u32;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
}

/// Section data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Board aggregate returned by `GET /board/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Body of add/update task requests
#[derive(Debug, Serialize)]
pub struct TaskTextBody<'a> {
    pub text: &'a str,
}
