//! Per-user state directory and setup record access.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

/// Directory name under `~/.config/opencode/` holding this plugin's state.
const STATE_DIR_NAME: &str = "agent-memory-systems-postgres";

/// Setup artifact written by the bootstrap script.
const SETUP_FILE: &str = "setup.json";

/// Journal file of lifecycle events.
const EVENTS_FILE: &str = "compaction-events.jsonl";

/// Optional components the user selected during setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedComponents {
    #[serde(default)]
    pub pgvector: bool,
    #[serde(default)]
    pub ollama: bool,
}

/// Parsed `setup.json`.
///
/// Written by an external bootstrap process; read-only here. A record
/// without `selected` parses fine and means setup recorded no choices,
/// which is distinct from the file being missing or malformed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetupRecord {
    #[serde(default)]
    pub selected: Option<SelectedComponents>,

    /// Fields other tooling writes; ignored here
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// The plugin's per-user state directory.
///
/// Created lazily, never deleted. Owns the setup artifact (read-only)
/// and the event journal file.
#[derive(Debug, Clone)]
pub struct StateDir {
    dir: Utf8PathBuf,
}

impl StateDir {
    /// Resolve the production location: `~/.config/opencode/<plugin>`.
    pub fn resolve() -> Self {
        let base = dirs::home_dir()
            .and_then(|home| Utf8PathBuf::from_path_buf(home).ok())
            .unwrap_or_else(|| Utf8PathBuf::from("."));
        Self {
            dir: base.join(".config").join("opencode").join(STATE_DIR_NAME),
        }
    }

    /// Use an explicit directory (tests).
    pub fn at(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path to the setup artifact.
    pub fn setup_path(&self) -> Utf8PathBuf {
        self.dir.join(SETUP_FILE)
    }

    /// Path to the event journal.
    pub fn events_path(&self) -> Utf8PathBuf {
        self.dir.join(EVENTS_FILE)
    }

    /// Create the directory tree. Idempotent; failures are swallowed,
    /// the next write will fail on its own and be swallowed in turn.
    pub fn ensure_dir(&self) {
        let _ = fs::create_dir_all(&self.dir);
    }

    /// Whether the setup artifact exists. False on any I/O error.
    pub fn has_setup(&self) -> bool {
        self.setup_path().try_exists().unwrap_or(false)
    }

    /// Read and parse the setup artifact. None when the file is missing
    /// or its content is not valid JSON for the record shape.
    pub fn read_setup(&self) -> Option<SetupRecord> {
        let raw = fs::read_to_string(self.setup_path()).ok()?;
        serde_json::from_str(&raw).ok()
    }
}
