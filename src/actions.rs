//! Board Actions
//!
//! Remote-first orchestration: every mutating action issues exactly one
//! server call and only commits a new board once the server confirms it.
//! Tasks are resolved by id both when the request is built and again when
//! the response is applied.

use crate::api::BoardApi;
use crate::board::{Move, TaskLocation, TaskRef};
use crate::error::ActionError;
use crate::models::{Board, Task, TaskId};

/// Holder of the canonical board
pub trait BoardCell {
    /// Current board value
    fn snapshot(&self) -> Board;
    /// Replace the board in one write
    fn commit(&self, board: Board);
}

/// Result of an action that may legitimately do nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Skipped,
}

/// Reject empty and over-long task text. Whitespace is valid text.
pub fn validate_task_text(text: &str, max: usize) -> Result<(), ActionError> {
    if text.is_empty() {
        return Err(ActionError::EmptyText);
    }
    if text.chars().count() > max {
        return Err(ActionError::TextTooLong { max });
    }
    Ok(())
}

pub struct BoardActions<'a, A, C> {
    api: &'a A,
    cell: &'a C,
    max_text_length: usize,
}

impl<'a, A: BoardApi, C: BoardCell> BoardActions<'a, A, C> {
    pub fn new(api: &'a A, cell: &'a C, max_text_length: usize) -> Self {
        Self { api, cell, max_text_length }
    }

    fn resolve(&self, board: &Board, task: TaskRef) -> Result<TaskLocation, ActionError> {
        let loc = board.locate(task.task_id).ok_or(ActionError::TaskNotFound(task.task_id))?;
        if loc.section_index != task.section_index {
            log::debug!(
                "task #{} rendered in section {} is now in section {}",
                task.task_id,
                task.section_index,
                loc.section_index
            );
        }
        Ok(loc)
    }

    /// Commit `next`, or warn that the task disappeared while the request was in flight
    fn apply(&self, task_id: TaskId, next: Option<Board>) -> Result<(), ActionError> {
        match next {
            Some(board) => {
                self.cell.commit(board);
                Ok(())
            }
            None => {
                log::warn!("task #{} vanished before the server response was applied", task_id);
                Err(ActionError::TaskNotFound(task_id))
            }
        }
    }

    /// Load the board from the server, replacing local state
    pub async fn fetch_board(&self) -> Result<(), ActionError> {
        let board = self.api.fetch_board().await?;
        log::info!(
            "loaded board #{} with {} sections and {} tasks",
            board.id,
            board.sections.len(),
            board.task_count()
        );
        self.cell.commit(board);
        Ok(())
    }

    /// Create a task at the end of a section; returns the server's task
    pub async fn add_task(&self, section_index: usize, text: &str) -> Result<Task, ActionError> {
        validate_task_text(text, self.max_text_length)?;
        let section_id = self
            .cell
            .snapshot()
            .sections
            .get(section_index)
            .map(|s| s.id)
            .ok_or(ActionError::SectionOutOfRange(section_index))?;

        let task = self.api.add_task(section_id, text).await?;

        let board = self.cell.snapshot();
        let index = board
            .section_index_of(section_id)
            .ok_or(ActionError::SectionOutOfRange(section_index))?;
        let next = board.with_task_added(index, task.clone());
        self.apply(task.id, next)?;
        log::debug!("added task #{} to section #{}", task.id, section_id);
        Ok(task)
    }

    pub async fn promote_task(&self, task: TaskRef) -> Result<Outcome, ActionError> {
        self.move_task(task, Move::Promote).await
    }

    pub async fn demote_task(&self, task: TaskRef) -> Result<Outcome, ActionError> {
        self.move_task(task, Move::Demote).await
    }

    async fn move_task(&self, task: TaskRef, direction: Move) -> Result<Outcome, ActionError> {
        let board = self.cell.snapshot();
        let loc = self.resolve(&board, task)?;
        let Some(target) = direction.target(loc.section_index, board.sections.len()) else {
            return Ok(Outcome::Skipped);
        };
        let from_id = board.sections[loc.section_index].id;
        let to_id = board.sections[target].id;

        match direction {
            Move::Promote => self.api.promote_task(from_id, task.task_id).await?,
            Move::Demote => self.api.demote_task(from_id, task.task_id).await?,
        }

        let board = self.cell.snapshot();
        let next = board
            .section_index_of(to_id)
            .and_then(|to| board.with_task_moved(task.task_id, to));
        self.apply(task.task_id, next)?;
        log::debug!("{}d task #{} to section #{}", direction.as_str(), task.task_id, to_id);
        Ok(Outcome::Applied)
    }

    /// Delete a task. Nothing is sent unless the user confirmed.
    pub async fn remove_task(&self, task: TaskRef, confirmed: bool) -> Result<(), ActionError> {
        if !confirmed {
            return Err(ActionError::NotConfirmed);
        }
        let board = self.cell.snapshot();
        let loc = self.resolve(&board, task)?;
        let section_id = board.sections[loc.section_index].id;

        self.api.delete_task(section_id, task.task_id).await?;

        let next = self.cell.snapshot().with_task_removed(task.task_id);
        self.apply(task.task_id, next)
    }

    /// Change a task's text to whatever the server confirms
    pub async fn update_task(&self, task: TaskRef, text: &str) -> Result<(), ActionError> {
        validate_task_text(text, self.max_text_length)?;
        let board = self.cell.snapshot();
        let loc = self.resolve(&board, task)?;
        let section_id = board.sections[loc.section_index].id;

        let updated = self.api.update_task(section_id, task.task_id, text).await?;

        let next = self.cell.snapshot().with_task_text(task.task_id, updated.text);
        self.apply(task.task_id, next)
    }

    /// End the session; returns where the browser should go next
    pub async fn logout(&self, redirect: &str) -> Result<String, ActionError> {
        self.api.logout().await?;
        log::info!("logged out");
        Ok(redirect.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{Section, SectionId};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    const MAX: usize = 250;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Fetch,
        Add(SectionId, String),
        Update(SectionId, TaskId, String),
        Delete(SectionId, TaskId),
        Promote(SectionId, TaskId),
        Demote(SectionId, TaskId),
        Logout,
    }

    /// In-memory server: records calls, fails when `fail_with` is set
    struct FakeApi {
        board: Board,
        calls: RefCell<Vec<Call>>,
        fail_with: Option<ApiError>,
        next_id: Cell<TaskId>,
    }

    impl FakeApi {
        fn new(board: Board) -> Self {
            Self { board, calls: RefCell::new(Vec::new()), fail_with: None, next_id: Cell::new(100) }
        }

        fn failing(message: &str) -> Self {
            let mut api = Self::new(sample_board());
            api.fail_with = Some(ApiError::Transport(message.to_string()));
            api
        }

        fn record(&self, call: Call) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl BoardApi for FakeApi {
        async fn fetch_board(&self) -> Result<Board, ApiError> {
            self.record(Call::Fetch)?;
            Ok(self.board.clone())
        }

        async fn add_task(&self, section_id: SectionId, text: &str) -> Result<Task, ApiError> {
            self.record(Call::Add(section_id, text.to_string()))?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            Ok(Task { id, text: text.to_string() })
        }

        async fn update_task(&self, section_id: SectionId, task_id: TaskId, text: &str) -> Result<Task, ApiError> {
            self.record(Call::Update(section_id, task_id, text.to_string()))?;
            Ok(Task { id: task_id, text: text.to_string() })
        }

        async fn delete_task(&self, section_id: SectionId, task_id: TaskId) -> Result<(), ApiError> {
            self.record(Call::Delete(section_id, task_id))
        }

        async fn promote_task(&self, section_id: SectionId, task_id: TaskId) -> Result<(), ApiError> {
            self.record(Call::Promote(section_id, task_id))
        }

        async fn demote_task(&self, section_id: SectionId, task_id: TaskId) -> Result<(), ApiError> {
            self.record(Call::Demote(section_id, task_id))
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.record(Call::Logout)
        }
    }

    struct TestCell(RefCell<Board>);

    impl BoardCell for TestCell {
        fn snapshot(&self) -> Board {
            self.0.borrow().clone()
        }

        fn commit(&self, board: Board) {
            *self.0.borrow_mut() = board;
        }
    }

    fn sample_board() -> Board {
        Board {
            id: 1,
            name: "Board".to_string(),
            sections: vec![
                Section { id: 1, name: "TODO".to_string(), tasks: vec![Task { id: 1, text: "a".to_string() }] },
                Section { id: 2, name: "DOING".to_string(), tasks: vec![] },
                Section { id: 3, name: "DONE".to_string(), tasks: vec![] },
            ],
        }
    }

    fn task_ids(board: &Board, section_index: usize) -> Vec<TaskId> {
        board.sections[section_index].tasks.iter().map(|t| t.id).collect()
    }

    fn at(section_index: usize, task_id: TaskId) -> TaskRef {
        TaskRef { section_index, task_id }
    }

    #[test]
    fn test_fetch_board_scenario() {
        let api = FakeApi::new(sample_board());
        let cell = TestCell(RefCell::new(Board::default()));
        let actions = BoardActions::new(&api, &cell, MAX);

        block_on(actions.fetch_board()).unwrap();

        let board = cell.snapshot();
        assert_eq!(board.sections.len(), 3);
        assert_eq!(board.sections[0].name, "TODO");
        assert_eq!(board.sections[0].tasks, vec![Task { id: 1, text: "a".to_string() }]);
        assert!(board.sections[1].tasks.is_empty());
        assert!(board.sections[2].tasks.is_empty());
    }

    #[test]
    fn test_fetch_failure_keeps_empty_board() {
        let api = FakeApi::failing("offline");
        let cell = TestCell(RefCell::new(Board::default()));
        let actions = BoardActions::new(&api, &cell, MAX);

        let err = block_on(actions.fetch_board()).unwrap_err();
        assert_eq!(err.to_string(), "offline");
        assert_eq!(cell.snapshot(), Board::default());
    }

    #[test]
    fn test_promote_scenario() {
        let api = FakeApi::new(sample_board());
        let cell = TestCell(RefCell::new(sample_board()));
        let actions = BoardActions::new(&api, &cell, MAX);

        let outcome = block_on(actions.promote_task(at(0, 1))).unwrap();

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(api.calls(), vec![Call::Promote(1, 1)]);
        let board = cell.snapshot();
        assert!(board.sections[0].tasks.is_empty());
        assert_eq!(task_ids(&board, 1), vec![1]);
    }

    #[test]
    fn test_promote_in_last_section_is_noop() {
        let mut board = sample_board();
        board.sections[2].tasks.push(Task { id: 9, text: "done".to_string() });
        let api = FakeApi::new(board.clone());
        let cell = TestCell(RefCell::new(board.clone()));
        let actions = BoardActions::new(&api, &cell, MAX);

        let outcome = block_on(actions.promote_task(at(2, 9))).unwrap();

        assert_eq!(outcome, Outcome::Skipped);
        assert!(api.calls().is_empty());
        assert_eq!(cell.snapshot(), board);
    }

    #[test]
    fn test_demote_in_first_section_is_noop() {
        let api = FakeApi::new(sample_board());
        let cell = TestCell(RefCell::new(sample_board()));
        let actions = BoardActions::new(&api, &cell, MAX);

        let outcome = block_on(actions.demote_task(at(0, 1))).unwrap();

        assert_eq!(outcome, Outcome::Skipped);
        assert!(api.calls().is_empty());
        assert_eq!(cell.snapshot(), sample_board());
    }

    #[test]
    fn test_promote_then_demote_restores_section() {
        let mut board = sample_board();
        board.sections[0].tasks.push(Task { id: 2, text: "b".to_string() });
        let api = FakeApi::new(board.clone());
        let cell = TestCell(RefCell::new(board));
        let actions = BoardActions::new(&api, &cell, MAX);

        block_on(actions.promote_task(at(0, 1))).unwrap();
        block_on(actions.demote_task(at(1, 1))).unwrap();

        assert_eq!(api.calls(), vec![Call::Promote(1, 1), Call::Demote(2, 1)]);
        let board = cell.snapshot();
        assert_eq!(task_ids(&board, 0), vec![2, 1]);
        assert!(board.sections[1].tasks.is_empty());
    }

    #[test]
    fn test_move_failure_leaves_state() {
        let api = FakeApi::failing("boom");
        let cell = TestCell(RefCell::new(sample_board()));
        let actions = BoardActions::new(&api, &cell, MAX);

        let err = block_on(actions.promote_task(at(0, 1))).unwrap_err();

        assert_eq!(err, ActionError::Api(ApiError::Transport("boom".to_string())));
        assert_eq!(cell.snapshot(), sample_board());
    }

    #[test]
    fn test_add_task_uses_server_id_and_appends() {
        let mut board = sample_board();
        board.sections[0].tasks.push(Task { id: 2, text: "b".to_string() });
        let api = FakeApi::new(board.clone());
        let cell = TestCell(RefCell::new(board));
        let actions = BoardActions::new(&api, &cell, MAX);

        let task = block_on(actions.add_task(0, "write tests")).unwrap();

        assert_eq!(task.id, 100);
        assert_eq!(api.calls(), vec![Call::Add(1, "write tests".to_string())]);
        let board = cell.snapshot();
        assert_eq!(board.sections[0].tasks.last(), Some(&task));
        assert_eq!(task_ids(&board, 0), vec![1, 2, 100]);
    }

    #[test]
    fn test_add_task_network_error_scenario() {
        let api = FakeApi::failing("network error");
        let cell = TestCell(RefCell::new(sample_board()));
        let actions = BoardActions::new(&api, &cell, MAX);

        let err = block_on(actions.add_task(0, "new task")).unwrap_err();

        assert!(err.to_string().contains("network error"));
        assert_eq!(cell.snapshot(), sample_board());
        assert_eq!(cell.snapshot().task_count(), 1);
    }

    #[test]
    fn test_empty_text_never_reaches_server() {
        let api = FakeApi::new(sample_board());
        let cell = TestCell(RefCell::new(sample_board()));
        let actions = BoardActions::new(&api, &cell, MAX);

        assert_eq!(block_on(actions.add_task(0, "")), Err(ActionError::EmptyText));
        assert_eq!(block_on(actions.update_task(at(0, 1), "")), Err(ActionError::EmptyText));

        assert!(api.calls().is_empty());
        assert_eq!(cell.snapshot(), sample_board());
    }

    #[test]
    fn test_whitespace_text_is_sent_as_is() {
        let api = FakeApi::new(sample_board());
        let cell = TestCell(RefCell::new(sample_board()));
        let actions = BoardActions::new(&api, &cell, MAX);

        let task = block_on(actions.add_task(0, "   ")).unwrap();
        block_on(actions.update_task(at(0, 1), " ")).unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::Add(1, "   ".to_string()), Call::Update(1, 1, " ".to_string())]
        );
        let board = cell.snapshot();
        assert_eq!(board.task(task.id).map(|t| t.text.as_str()), Some("   "));
        assert_eq!(board.task(1).map(|t| t.text.as_str()), Some(" "));
    }

    #[test]
    fn test_add_task_rejects_bad_section_and_long_text() {
        let api = FakeApi::new(sample_board());
        let cell = TestCell(RefCell::new(sample_board()));
        let actions = BoardActions::new(&api, &cell, 5);

        assert_eq!(block_on(actions.add_task(3, "ok")), Err(ActionError::SectionOutOfRange(3)));
        assert_eq!(block_on(actions.add_task(0, "too long")), Err(ActionError::TextTooLong { max: 5 }));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_remove_requires_confirmation() {
        let api = FakeApi::new(sample_board());
        let cell = TestCell(RefCell::new(sample_board()));
        let actions = BoardActions::new(&api, &cell, MAX);

        assert_eq!(block_on(actions.remove_task(at(0, 1), false)), Err(ActionError::NotConfirmed));
        assert!(api.calls().is_empty());
        assert_eq!(cell.snapshot(), sample_board());

        block_on(actions.remove_task(at(0, 1), true)).unwrap();
        assert_eq!(api.calls(), vec![Call::Delete(1, 1)]);
        assert_eq!(cell.snapshot().task_count(), 0);
    }

    #[test]
    fn test_update_applies_server_text() {
        let api = FakeApi::new(sample_board());
        let cell = TestCell(RefCell::new(sample_board()));
        let actions = BoardActions::new(&api, &cell, MAX);

        block_on(actions.update_task(at(0, 1), "renamed")).unwrap();

        assert_eq!(api.calls(), vec![Call::Update(1, 1, "renamed".to_string())]);
        assert_eq!(cell.snapshot().task(1).map(|t| t.text.as_str()), Some("renamed"));
    }

    #[test]
    fn test_stale_index_resolves_by_identity() {
        let mut board = sample_board();
        board.sections[1].tasks.push(Task { id: 5, text: "moved".to_string() });
        let api = FakeApi::new(board.clone());
        let cell = TestCell(RefCell::new(board));
        let actions = BoardActions::new(&api, &cell, MAX);

        // Rendered in TODO, but the task already lives in DOING
        block_on(actions.promote_task(at(0, 5))).unwrap();

        assert_eq!(api.calls(), vec![Call::Promote(2, 5)]);
        assert_eq!(task_ids(&cell.snapshot(), 2), vec![5]);
    }

    #[test]
    fn test_unknown_task_is_rejected_before_request() {
        let api = FakeApi::new(sample_board());
        let cell = TestCell(RefCell::new(sample_board()));
        let actions = BoardActions::new(&api, &cell, MAX);

        assert_eq!(block_on(actions.promote_task(at(0, 42))), Err(ActionError::TaskNotFound(42)));
        assert_eq!(block_on(actions.remove_task(at(0, 42), true)), Err(ActionError::TaskNotFound(42)));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_logout() {
        let api = FakeApi::new(sample_board());
        let cell = TestCell(RefCell::new(sample_board()));
        let actions = BoardActions::new(&api, &cell, MAX);

        let redirect = block_on(actions.logout("http://localhost:8000/")).unwrap();
        assert_eq!(redirect, "http://localhost:8000/");
        assert_eq!(api.calls(), vec![Call::Logout]);

        let failing = FakeApi::failing("denied");
        let actions = BoardActions::new(&failing, &cell, MAX);
        assert!(block_on(actions.logout("http://localhost:8000/")).is_err());
    }

    #[test]
    fn test_validate_task_text() {
        assert_eq!(validate_task_text("a", 1), Ok(()));
        assert_eq!(validate_task_text("", 10), Err(ActionError::EmptyText));
        assert_eq!(validate_task_text(" \n", 10), Ok(()));
        assert_eq!(validate_task_text("ab", 1), Err(ActionError::TextTooLong { max: 1 }));
    }
}
