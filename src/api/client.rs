//! HTTP Client
//!
//! `reqwest`-based implementation of `BoardApi`. On wasm32 reqwest sits on
//! the browser's `fetch`.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::csrf::document_cookie;
use super::{BoardApi, Endpoints};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Board, SectionId, Task, TaskId, TaskTextBody};

/// Longest server message shown to the user
const STATUS_MESSAGE_MAX_CHARS: usize = 200;

/// Board server client bound to one origin
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    endpoints: Endpoints,
    csrf_cookie: String,
    csrf_header: String,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::Encode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Message for a non-success response.
///
/// Only short plain-text bodies are shown; HTML error pages and JSON fall
/// back to the reason phrase.
fn status_message(content_type: Option<&str>, body: &str, status: u16, reason: Option<&str>) -> String {
    let plain = content_type.is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("text/plain"));
    let body = body.trim();
    if plain && !body.is_empty() {
        if body.chars().count() <= STATUS_MESSAGE_MAX_CHARS {
            return body.to_string();
        }
        let cut: String = body.chars().take(STATUS_MESSAGE_MAX_CHARS).collect();
        return format!("{}...", cut.trim_end());
    }
    match reason {
        Some(reason) if !reason.is_empty() => reason.to_string(),
        _ => format!("status code {}", status),
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: Client::new(),
            endpoints: Endpoints::new(config),
            csrf_cookie: config.csrf_cookie.clone(),
            csrf_header: config.csrf_header.clone(),
        }
    }

    /// Common headers and credentials for every board request
    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header(ACCEPT, "application/json");
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_same_origin();
        match document_cookie(&self.csrf_cookie) {
            Some(token) => builder.header(self.csrf_header.as_str(), token),
            None => builder,
        }
    }

    /// Send the request and return the response once it has a success status
    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.prepare(builder).send().await?;
        let status = response.status();
        log::debug!("{} {}", status.as_u16(), response.url());
        if status.is_success() {
            return Ok(response);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: status_message(content_type.as_deref(), &body, status.as_u16(), status.canonical_reason()),
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        Ok(self.send(builder).await?.json::<T>().await?)
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send(builder).await.map(|_| ())
    }
}

impl BoardApi for ApiClient {
    async fn fetch_board(&self) -> Result<Board, ApiError> {
        self.send_json(self.http.get(self.endpoints.board())).await
    }

    async fn add_task(&self, section_id: SectionId, text: &str) -> Result<Task, ApiError> {
        let request = self.http.post(self.endpoints.section_tasks(section_id)).json(&TaskTextBody { text });
        self.send_json(request).await
    }

    async fn update_task(&self, section_id: SectionId, task_id: TaskId, text: &str) -> Result<Task, ApiError> {
        let request = self.http.put(self.endpoints.task(section_id, task_id)).json(&TaskTextBody { text });
        self.send_json(request).await
    }

    async fn delete_task(&self, section_id: SectionId, task_id: TaskId) -> Result<(), ApiError> {
        self.send_empty(self.http.delete(self.endpoints.task(section_id, task_id))).await
    }

    async fn promote_task(&self, section_id: SectionId, task_id: TaskId) -> Result<(), ApiError> {
        self.send_empty(self.http.post(self.endpoints.promote(section_id, task_id))).await
    }

    async fn demote_task(&self, section_id: SectionId, task_id: TaskId) -> Result<(), ApiError> {
        self.send_empty(self.http.post(self.endpoints.demote(section_id, task_id))).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.send_empty(self.http.get(self.endpoints.logout())).await
    }
}
