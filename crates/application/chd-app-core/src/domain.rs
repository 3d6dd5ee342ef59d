use std::collections::VecDeque;

use chd_core::SystemProfile;

use crate::pipeline::ConversionState;

pub const TOOL_NOT_FOUND_MESSAGE: &str = "Could not find chdman! Put it in the same folder or PATH.";
pub const NO_MATCHING_FILES_MESSAGE: &str = "No .cue/.gdi/.iso files found.";
pub const BUSY_MESSAGE: &str = "A conversion is already running. Wait for it to finish.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Warning,
    Error,
}

/// A blocking notice the UI shows as a native dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn tool_not_found() -> Self {
        Self::error("Error", TOOL_NOT_FOUND_MESSAGE)
    }

    pub fn no_matching_files() -> Self {
        Self::warning("No files", NO_MATCHING_FILES_MESSAGE)
    }

    pub fn busy() -> Self {
        Self::info("Busy", BUSY_MESSAGE)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub system: SystemProfile,
    pub conversion: ConversionState,
    pub alerts: VecDeque<Alert>,
}
