//! Append-only jsonl journal of lifecycle events.

use crate::attempt;
use crate::state::{SelectedComponents, StateDir};
use crate::verify::VerificationResults;
use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;

/// Current UTC instant, ISO-8601, truncated to whole seconds.
pub fn now_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// One lifecycle occurrence, discriminated by its `event` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum JournalEvent {
    #[serde(rename = "plugin.loaded")]
    PluginLoaded { cwd: String },

    #[serde(rename = "session.compacting")]
    SessionCompacting { session_id: String, cwd: String },

    #[serde(rename = "session.compacted")]
    SessionCompacted { session_id: String, cwd: String },

    #[serde(rename = "setup.verified")]
    SetupVerified {
        selected: SelectedComponents,
        results: VerificationResults,
    },
}

/// A journal line: the event plus its capture time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(flatten)]
    pub event: JournalEvent,
    pub time_utc: String,
}

/// Append-only journal in the state directory.
///
/// Diagnostic, not authoritative: every append failure is swallowed so
/// the calling hook never fails on journal I/O. Entries are never
/// rewritten or deleted.
#[derive(Debug, Clone)]
pub struct EventJournal {
    state: StateDir,
}

impl EventJournal {
    pub fn new(state: StateDir) -> Self {
        Self { state }
    }

    /// Stamp the event with the current UTC second and append it as one
    /// line. Fire-and-forget.
    pub fn append(&self, event: JournalEvent) {
        let entry = JournalEntry {
            event,
            time_utc: now_utc(),
        };
        attempt(|| self.try_append(&entry));
    }

    fn try_append(&self, entry: &JournalEntry) -> Result<()> {
        self.state.ensure_dir();

        let path = self.state.events_path();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open journal: {}", path))?;

        let line = serde_json::to_string(entry)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}
