//! Frontend Configuration
//!
//! Shared constants and the start-up configuration injected into the app.

use log::LevelFilter;

/// Page title shown in the header
pub const APP_TITLE: &str = "Kanbanlache";

/// Max length of task text (matches the server's column width)
pub const TASK_TEXT_MAX_LENGTH: usize = 250;

/// Cookie holding the CSRF token set by the server
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Header the CSRF token is echoed in
pub const CSRF_HEADER_NAME: &str = "X-CSRFTOKEN";

/// Gap between sections, in percent of the board width
pub const SECTIONS_GAP_PERCENT: f64 = 4.0;

/// Viewport width (px) at which sections switch from stacked to side by side
pub const LAYOUT_BREAKPOINT_PX: f64 = 768.0;

/// Section width (percent) when stacked vertically
pub const STACKED_WIDTH_PERCENT: f64 = 90.0;

/// How long a notice stays visible
pub const NOTICE_TTL_MS: u32 = 5_000;

/// Remote API settings
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Origin every endpoint URL is derived from, e.g. `https://kanban.example`
    pub origin: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    /// Where the browser goes after a successful logout
    pub logout_redirect: String,
}

impl ApiConfig {
    pub fn for_origin(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/').to_string();
        Self {
            logout_redirect: format!("{}/", origin),
            origin,
            csrf_cookie: CSRF_COOKIE_NAME.to_string(),
            csrf_header: CSRF_HEADER_NAME.to_string(),
        }
    }
}

/// Responsive layout settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub breakpoint_px: f64,
    pub gap_percent: f64,
    pub stacked_width_percent: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: LAYOUT_BREAKPOINT_PX,
            gap_percent: SECTIONS_GAP_PERCENT,
            stacked_width_percent: STACKED_WIDTH_PERCENT,
        }
    }
}

/// Everything the app needs at start-up
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub layout: LayoutConfig,
    pub text_max_length: usize,
    pub notice_ttl_ms: u32,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn for_origin(origin: &str) -> Self {
        Self {
            api: ApiConfig::for_origin(origin),
            layout: LayoutConfig::default(),
            text_max_length: TASK_TEXT_MAX_LENGTH,
            notice_ttl_ms: NOTICE_TTL_MS,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }

    /// Read the page origin once and build the config from it
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|win| win.location().origin().ok())
            .unwrap_or_default();
        Self::for_origin(&origin)
    }
}
