//! Board Transitions
//!
//! Pure, copy-on-write operations on a `Board`. Every method returns a new
//! board and leaves `self` untouched; `None` means the operation does not
//! apply to the current board.

use crate::models::{Board, SectionId, Task, TaskId};

/// Where a task currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLocation {
    pub section_index: usize,
    pub position: usize,
}

/// A task as seen by the component that rendered it.
///
/// `section_index` is only a hint; `task_id` is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRef {
    pub section_index: usize,
    pub task_id: TaskId,
}

/// Direction of a move between adjacent sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// One section to the right
    Promote,
    /// One section to the left
    Demote,
}

impl Move {
    /// Destination index, or `None` when the move would leave the board
    pub fn target(self, section_index: usize, section_count: usize) -> Option<usize> {
        if section_index >= section_count {
            return None;
        }
        match self {
            Move::Promote if section_index + 1 < section_count => Some(section_index + 1),
            Move::Demote if section_index > 0 => Some(section_index - 1),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Promote => "promote",
            Move::Demote => "demote",
        }
    }
}

impl Board {
    /// Find a task by identity
    pub fn locate(&self, task_id: TaskId) -> Option<TaskLocation> {
        self.sections.iter().enumerate().find_map(|(section_index, section)| {
            section
                .tasks
                .iter()
                .position(|task| task.id == task_id)
                .map(|position| TaskLocation { section_index, position })
        })
    }

    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        let loc = self.locate(task_id)?;
        self.sections[loc.section_index].tasks.get(loc.position)
    }

    pub fn section_index_of(&self, section_id: SectionId) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }

    pub fn task_count(&self) -> usize {
        self.sections.iter().map(|s| s.tasks.len()).sum()
    }

    /// Append a task to the end of a section
    pub fn with_task_added(&self, section_index: usize, task: Task) -> Option<Board> {
        if section_index >= self.sections.len() {
            return None;
        }
        let mut next = self.clone();
        next.sections[section_index].tasks.push(task);
        Some(next)
    }

    /// Take a task out of its section and append it to `to_section`
    pub fn with_task_moved(&self, task_id: TaskId, to_section: usize) -> Option<Board> {
        if to_section >= self.sections.len() {
            return None;
        }
        let loc = self.locate(task_id)?;
        let mut next = self.clone();
        let task = next.sections[loc.section_index].tasks.remove(loc.position);
        next.sections[to_section].tasks.push(task);
        Some(next)
    }

    pub fn with_task_removed(&self, task_id: TaskId) -> Option<Board> {
        let loc = self.locate(task_id)?;
        let mut next = self.clone();
        next.sections[loc.section_index].tasks.remove(loc.position);
        Some(next)
    }

    /// Replace the text of a task in place (position unchanged)
    pub fn with_task_text(&self, task_id: TaskId, text: String) -> Option<Board> {
        let loc = self.locate(task_id)?;
        let mut next = self.clone();
        next.sections[loc.section_index].tasks[loc.position].text = text;
        Some(next)
    }
}
