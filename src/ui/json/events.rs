//! Shared JSON event types for consistent CLI output.
//!
//! Every command emits `start`, its payload events and then `complete`
//! (or `error`).

use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
        }
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
        }
    }
}

/// Payload event; `data` fields are flattened next to `event` and `command`.
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'a str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(event: &'a str, command: &'a str, data: T) -> Self {
        Self {
            event,
            command,
            data,
        }
    }
}
