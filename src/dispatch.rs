//! Dispatch Interface
//!
//! What a parent component hands to its children. The board-level dispatch
//! is narrowed per section and then per task, so a section never needs to
//! know its own index and a task card only calls zero-argument methods.

use crate::board::TaskRef;
use crate::models::TaskId;

/// Board-level actions, implemented by the app root
pub trait BoardDispatch: Clone + 'static {
    /// Ask for a new task; `on_settled` receives `true` once it was added
    fn add_task<F>(&self, section_index: usize, text: String, on_settled: F)
    where
        F: FnOnce(bool) + 'static;

    fn promote(&self, task: TaskRef);

    fn demote(&self, task: TaskRef);

    /// Request removal (the root asks the user to confirm)
    fn remove(&self, task: TaskRef);

    fn update(&self, task: TaskRef, text: String);
}

/// Board dispatch with the section index applied
#[derive(Debug, Clone, Copy)]
pub struct SectionDispatch<D> {
    board: D,
    section_index: usize,
}

/// Section dispatch with the task applied
#[derive(Debug, Clone, Copy)]
pub struct TaskDispatch<D> {
    board: D,
    task: TaskRef,
}

pub fn bind_section_dispatch<D: BoardDispatch>(board: &D, section_index: usize) -> SectionDispatch<D> {
    SectionDispatch { board: board.clone(), section_index }
}

pub fn bind_task_dispatch<D: BoardDispatch>(section: &SectionDispatch<D>, task_id: TaskId) -> TaskDispatch<D> {
    TaskDispatch {
        board: section.board.clone(),
        task: TaskRef { section_index: section.section_index, task_id },
    }
}

impl<D: BoardDispatch> SectionDispatch<D> {
    pub fn section_index(&self) -> usize {
        self.section_index
    }

    pub fn add_task<F>(&self, text: String, on_settled: F)
    where
        F: FnOnce(bool) + 'static,
    {
        self.board.add_task(self.section_index, text, on_settled);
    }
}

impl<D: BoardDispatch> TaskDispatch<D> {
    pub fn task(&self) -> TaskRef {
        self.task
    }

    pub fn promote(&self) {
        self.board.promote(self.task);
    }

    pub fn demote(&self) {
        self.board.demote(self.task);
    }

    pub fn remove(&self) {
        self.board.remove(self.task);
    }

    pub fn update(&self, text: String) {
        self.board.update(self.task, text);
    }
}
