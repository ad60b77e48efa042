//! Console display configuration.
//!
//! The display mode is set via the `E42_UNIT_DISPLAY` environment variable:
//! - `details` (default): one `PASS`/`FAIL` line per case, in registration order.
//! - `summary`: the `.`/`F` progress line followed by the failure details block.
//! - `quiet`: nothing on the console; callers rely on reports and the exit status.

use std::sync::OnceLock;

/// Environment variable consulted by [`display_mode`].
pub const DISPLAY_ENV: &str = "E42_UNIT_DISPLAY";

/// How a suite is rendered to the console after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Details,
    Summary,
    Quiet,
}

impl DisplayMode {
    /// Parse from string (case-insensitive). Unknown values fall back to `Details`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" | "dots" | "brief" => Self::Summary,
            "quiet" | "none" | "off" | "silent" => Self::Quiet,
            _ => Self::Details,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::Summary => "summary",
            Self::Quiet => "quiet",
        }
    }
}

static CACHED_MODE: OnceLock<DisplayMode> = OnceLock::new();

/// Display mode from the environment, read on first call and cached thereafter.
#[must_use]
pub fn display_mode() -> DisplayMode {
    *CACHED_MODE.get_or_init(|| {
        std::env::var(DISPLAY_ENV)
            .map(|raw| DisplayMode::from_str_loose(&raw))
            .unwrap_or_default()
    })
}
