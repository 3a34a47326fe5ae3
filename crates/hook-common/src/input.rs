//! Hook input parsing from stdin.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Read};

/// Working directory the host passes to its hooks, with a cwd fallback
/// for direct invocation.
pub fn project_dir() -> String {
    std::env::var("AGENT_PROJECT_DIR").unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|_| ".".to_string())
    })
}

/// Input for the session-compacting hook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompactingInput {
    /// Session being compacted
    #[serde(rename = "sessionID", default)]
    pub session_id: String,

    /// Additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl CompactingInput {
    /// Read and parse hook input from stdin.
    pub fn from_stdin() -> anyhow::Result<Self> {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let parsed: CompactingInput = serde_json::from_str(&input)?;
        Ok(parsed)
    }
}

/// A generic host event delivered to the event hook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostEvent {
    /// Event tag (e.g. "session.compacted")
    #[serde(rename = "type", default)]
    pub event_type: String,

    /// Event-specific properties
    #[serde(default)]
    pub properties: EventProperties,

    /// Additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Properties attached to a host event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventProperties {
    /// Session the event concerns
    #[serde(rename = "sessionID", default)]
    pub session_id: Option<String>,

    /// Additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl HostEvent {
    /// Read and parse a host event from stdin.
    ///
    /// The host may wrap the event as `{"event": {...}}` or deliver it
    /// bare; both shapes are accepted.
    pub fn from_stdin() -> anyhow::Result<Self> {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        Self::from_json(&input)
    }

    /// Parse a host event from a JSON string.
    pub fn from_json(input: &str) -> anyhow::Result<Self> {
        #[derive(Deserialize)]
        struct Envelope {
            event: HostEvent,
        }

        if let Ok(envelope) = serde_json::from_str::<Envelope>(input) {
            return Ok(envelope.event);
        }
        let parsed: HostEvent = serde_json::from_str(input)?;
        Ok(parsed)
    }

    /// Check whether this event carries the given tag.
    pub fn is(&self, tag: &str) -> bool {
        self.event_type == tag
    }
}
