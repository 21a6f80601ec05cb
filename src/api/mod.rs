//! Board Server Client
//!
//! Frontend bindings to the board server's HTTP API, organized by concern.

mod client;
mod csrf;
mod endpoints;

use crate::error::ApiError;
use crate::models::{Board, SectionId, Task, TaskId};

pub use client::ApiClient;
pub use endpoints::Endpoints;

/// Remote operations the board relies on.
///
/// `ApiClient` talks HTTP; tests substitute an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait BoardApi {
    async fn fetch_board(&self) -> Result<Board, ApiError>;

    async fn add_task(&self, section_id: SectionId, text: &str) -> Result<Task, ApiError>;

    async fn update_task(&self, section_id: SectionId, task_id: TaskId, text: &str) -> Result<Task, ApiError>;

    async fn delete_task(&self, section_id: SectionId, task_id: TaskId) -> Result<(), ApiError>;

    async fn promote_task(&self, section_id: SectionId, task_id: TaskId) -> Result<(), ApiError>;

    async fn demote_task(&self, section_id: SectionId, task_id: TaskId) -> Result<(), ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;
}
