//! Host client surface: toast notifications and log forwarding.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Info,
    Success,
    Warning,
    Error,
}

/// Payload for a host toast notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastParams {
    /// Working directory the toast concerns
    pub directory: String,
    /// Toast title
    pub title: String,
    /// Toast body
    pub message: String,
    /// Severity
    pub variant: ToastVariant,
    /// Display duration in milliseconds
    pub duration: u64,
}

/// Payload for a host log line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogParams {
    /// Originating service name
    pub service: String,
    /// Log level (e.g. "info")
    pub level: String,
    /// Log message
    pub message: String,
}

/// Client handle to the host runtime.
///
/// The host surfaces toasts in its UI and log lines in its log stream.
/// Both calls are fallible; callers treat every failure as best-effort.
pub trait HostClient {
    /// Show a toast notification to the user.
    fn show_toast(&self, params: &ToastParams) -> Result<()>;

    /// Forward a log line to the host's log stream.
    fn log(&self, params: &LogParams) -> Result<()>;
}

/// Production client for hook binaries.
///
/// A hook binary's stdout belongs to its result payload, so host-bound
/// messages go to stderr as one JSON line each; the host collects hook
/// stderr and surfaces it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrClient;

impl StderrClient {
    fn emit<T: Serialize>(kind: &str, payload: &T) -> Result<()> {
        let mut line = serde_json::Map::new();
        line.insert(kind.to_string(), serde_json::to_value(payload)?);
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{}", serde_json::Value::Object(line))?;
        Ok(())
    }
}

impl HostClient for StderrClient {
    fn show_toast(&self, params: &ToastParams) -> Result<()> {
        Self::emit("toast", params)
    }

    fn log(&self, params: &LogParams) -> Result<()> {
        Self::emit("log", params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_serialization() {
        let params = ToastParams {
            directory: "/work".to_string(),
            title: "memory".to_string(),
            message: "setup missing".to_string(),
            variant: ToastVariant::Warning,
            duration: 8000,
        };
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"variant\":\"warning\""));
        assert!(json.contains("\"duration\":8000"));
    }

    #[test]
    fn test_log_serialization() {
        let params = LogParams {
            service: "agent-memory".to_string(),
            level: "info".to_string(),
            message: "Session compacted (logged)".to_string(),
        };
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"level\":\"info\""));
    }
}
