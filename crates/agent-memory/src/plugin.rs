//! Hook dispatcher: composes the pipeline per event type.

use crate::attempt;
use crate::journal::{EventJournal, JournalEvent};
use crate::persist::persist;
use crate::pg::PgConfig;
use crate::state::StateDir;
use crate::verify::{verify_setup, EndpointProbe, HttpProbe};
use hook_common::{
    CommandRunner, CompactingInput, CompactionOutput, HostClient, HostEvent, LogParams,
    StderrClient, SystemRunner, ToastParams, ToastVariant,
};

/// Plugin identity: names the state directory, toast titles, and the
/// log service field.
pub const PLUGIN_NAME: &str = "agent-memory-systems-postgres";

/// Event tag the generic hook reacts to.
const COMPACTED_TAG: &str = "session.compacted";

const SETUP_MISSING_TOAST: &str = "Optional setup not completed. Run bootstrap to enable pgpass/pgvector/Ollama and record setup.json.";

const SETUP_MISSING_CONTEXT: &str = "## Setup Missing (agent-memory-systems-postgres)
- Ask the user if they want to enable optional components: pgpass, pgvector, local embeddings (Ollama)
- Record the choice by running the bootstrap script in the skill directory (writes setup.json)
- Recommended: install all optional components, then fix any failures reported
";

const MEMORY_SYSTEM_CONTEXT: &str = "## Memory System (agent-memory-systems-postgres)
- Use store_memory(...) after solving non-obvious problems
- Compaction is logged (local jsonl + optional Postgres write)
";

/// Dependency bundle the host supplies when loading the plugin.
pub struct PluginDeps {
    /// Working directory of the hosted session
    pub directory: String,
    /// Command-execution facility
    pub runner: Box<dyn CommandRunner>,
    /// Toast/log client
    pub client: Box<dyn HostClient>,
    /// HTTP reachability probe
    pub probe: Box<dyn EndpointProbe>,
}

impl PluginDeps {
    /// Production bundle for hook binaries.
    pub fn production(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            runner: Box::new(SystemRunner),
            client: Box::new(StderrClient),
            probe: Box::new(HttpProbe),
        }
    }
}

/// The object the host's hook bindings call into.
///
/// Construction is effect-free; `on_load` runs the load-time pipeline.
/// No state is held between invocations beyond the files in the state
/// directory.
pub struct MemoryPlugin {
    deps: PluginDeps,
    state: StateDir,
    journal: EventJournal,
}

impl MemoryPlugin {
    /// Named hook bindings this plugin exposes, in host order.
    pub const HOOKS: [&'static str; 3] =
        ["plugin.load", "experimental.session.compacting", "event"];

    /// Build against the per-user state directory.
    pub fn new(deps: PluginDeps) -> Self {
        Self::with_state(deps, StateDir::resolve())
    }

    /// Build against an explicit state directory (tests).
    pub fn with_state(deps: PluginDeps, state: StateDir) -> Self {
        let journal = EventJournal::new(state.clone());
        Self {
            deps,
            state,
            journal,
        }
    }

    /// Load-time pipeline: journal the load, nudge toward setup when the
    /// artifact is absent, then verify whatever setup selected.
    pub fn on_load(&self) {
        self.journal.append(JournalEvent::PluginLoaded {
            cwd: self.deps.directory.clone(),
        });

        if !self.state.has_setup() {
            attempt(|| {
                self.deps.client.show_toast(&ToastParams {
                    directory: self.deps.directory.clone(),
                    title: PLUGIN_NAME.to_string(),
                    message: SETUP_MISSING_TOAST.to_string(),
                    variant: ToastVariant::Warning,
                    duration: 8000,
                })
            });
        }

        verify_setup(
            &self.state,
            &self.journal,
            &PgConfig::from_env(),
            self.deps.runner.as_ref(),
            self.deps.client.as_ref(),
            self.deps.probe.as_ref(),
            &self.deps.directory,
        );
    }

    /// Pre-compaction hook: journal, add context blocks, fire the
    /// best-effort store write. Returns normally in all cases.
    pub fn on_session_compacting(&self, input: &CompactingInput, output: &mut CompactionOutput) {
        self.journal.append(JournalEvent::SessionCompacting {
            session_id: input.session_id.clone(),
            cwd: self.deps.directory.clone(),
        });

        if !self.state.has_setup() {
            output.push_context(SETUP_MISSING_CONTEXT);
        }
        output.push_context(MEMORY_SYSTEM_CONTEXT);

        persist(
            self.deps.runner.as_ref(),
            &PgConfig::from_env(),
            &self.deps.directory,
            &input.session_id,
        );
    }

    /// Generic event hook: reacts to `session.compacted`, ignores every
    /// other tag.
    pub fn on_event(&self, event: &HostEvent) {
        if !event.is(COMPACTED_TAG) {
            return;
        }

        self.journal.append(JournalEvent::SessionCompacted {
            session_id: event.properties.session_id.clone().unwrap_or_default(),
            cwd: self.deps.directory.clone(),
        });

        attempt(|| {
            self.deps.client.log(&LogParams {
                service: PLUGIN_NAME.to_string(),
                level: "info".to_string(),
                message: "Session compacted (logged)".to_string(),
            })
        });
    }
}
