//! Compaction memory pipeline for agent-memory hooks.
//!
//! Provides:
//! - Per-user state directory and setup record access
//! - Append-only jsonl event journal
//! - Capability verification (pgvector, Ollama)
//! - Best-effort Postgres memory persistence
//! - The hook dispatcher the entry-point binaries call into

pub mod journal;
pub mod persist;
pub mod pg;
pub mod plugin;
pub mod sql;
pub mod state;
pub mod verify;

pub use journal::{EventJournal, JournalEntry, JournalEvent, now_utc};
pub use persist::persist;
pub use pg::PgConfig;
pub use plugin::{MemoryPlugin, PluginDeps, PLUGIN_NAME};
pub use sql::escape_literal;
pub use state::{SelectedComponents, SetupRecord, StateDir};
pub use verify::{EndpointProbe, HttpProbe, VerificationResults};

/// Run a fallible external call and discard its outcome.
///
/// Every store write, journal append, and host-client call in this
/// pipeline is best-effort: no error may cross the hook boundary back
/// into the host. This is the single place that policy lives.
pub(crate) fn attempt<T>(call: impl FnOnce() -> anyhow::Result<T>) -> Option<T> {
    call().ok()
}
