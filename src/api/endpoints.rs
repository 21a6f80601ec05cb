//! Endpoint URLs
//!
//! All URLs are derived from the configured origin.

use crate::config::ApiConfig;
use crate::models::{SectionId, TaskId};

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    origin: String,
}

impl Endpoints {
    pub fn new(config: &ApiConfig) -> Self {
        Self { origin: config.origin.trim_end_matches('/').to_string() }
    }

    pub fn board(&self) -> String {
        format!("{}/board/", self.origin)
    }

    pub fn section_tasks(&self, section_id: SectionId) -> String {
        format!("{}/board/section/{}/task", self.origin, section_id)
    }

    pub fn task(&self, section_id: SectionId, task_id: TaskId) -> String {
        format!("{}/{}", self.section_tasks(section_id), task_id)
    }

    pub fn promote(&self, section_id: SectionId, task_id: TaskId) -> String {
        format!("{}/promote", self.task(section_id, task_id))
    }

    pub fn demote(&self, section_id: SectionId, task_id: TaskId) -> String {
        format!("{}/demote", self.task(section_id, task_id))
    }

    pub fn logout(&self) -> String {
        format!("{}/accounts/logout", self.origin)
    }
}
