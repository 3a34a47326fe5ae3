//! Capability verification for optional subsystems.
//!
//! Runs once per plugin lifetime, from the load hook. Each capability the
//! setup record selected gets one live check; outcomes are journaled and
//! failures surface as advisory toasts only.

use crate::journal::{EventJournal, JournalEvent};
use crate::pg::PgConfig;
use crate::plugin::PLUGIN_NAME;
use crate::state::StateDir;
use hook_common::{CommandRunner, HostClient, ToastParams, ToastVariant};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reachability endpoint of the local embedding service.
pub const OLLAMA_TAGS_URL: &str = "http://localhost:11434/api/tags";

const PGVECTOR_CHECK: &str = "SELECT 1 FROM pg_extension WHERE extname='vector';";

/// Per-capability verification outcome. `None` means the capability was
/// not selected and is omitted from the journaled record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pgvector: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ollama: Option<bool>,
}

/// Reachability probe for an HTTP endpoint.
pub trait EndpointProbe {
    /// True when a GET against `url` yields any success response.
    fn is_reachable(&self, url: &str) -> bool;
}

/// Production probe using a blocking HTTP client with a short timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpProbe;

impl EndpointProbe for HttpProbe {
    fn is_reachable(&self, url: &str) -> bool {
        let client = match reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
        {
            Ok(client) => client,
            Err(_) => return false,
        };
        match client.get(url).send() {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

fn warn(client: &dyn HostClient, directory: &str, message: &str) {
    crate::attempt(|| {
        client.show_toast(&ToastParams {
            directory: directory.to_string(),
            title: PLUGIN_NAME.to_string(),
            message: message.to_string(),
            variant: ToastVariant::Warning,
            duration: 8000,
        })
    });
}

/// Verify every selected capability and journal the outcome.
///
/// No setup record, or a record without `selected`, means setup has not
/// run: skip entirely, with zero journal entries and zero toasts.
pub fn verify_setup(
    state: &StateDir,
    journal: &EventJournal,
    pg: &PgConfig,
    runner: &dyn CommandRunner,
    client: &dyn HostClient,
    probe: &dyn EndpointProbe,
    directory: &str,
) {
    let Some(selected) = state.read_setup().and_then(|setup| setup.selected) else {
        return;
    };

    let mut results = VerificationResults::default();

    if selected.pgvector {
        let ok = runner
            .run("psql", &pg.psql_args(PGVECTOR_CHECK))
            .map(|result| result.success)
            .unwrap_or(false);
        results.pgvector = Some(ok);
        if !ok {
            warn(
                client,
                directory,
                "Setup selected pgvector=true but extension \"vector\" is not available (or psql auth failed).",
            );
        }
    }

    if selected.ollama {
        let ok = probe.is_reachable(OLLAMA_TAGS_URL);
        results.ollama = Some(ok);
        if !ok {
            warn(
                client,
                directory,
                "Setup selected ollama=true but http://localhost:11434 is not reachable.",
            );
        }
    }

    journal.append(JournalEvent::SetupVerified { selected, results });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::JournalEntry;
    use crate::plugin::testing::{FailRunner, OkRunner, RecordingClient, StubProbe};
    use camino::Utf8PathBuf;
    use tempfile::tempdir;

    struct Fixture {
        state: StateDir,
        journal: EventJournal,
        _tmp: tempfile::TempDir,
    }

    fn fixture(setup_json: Option<&str>) -> Fixture {
        let tmp = tempdir().unwrap();
        let state = StateDir::at(Utf8PathBuf::from_path_buf(tmp.path().join("state")).unwrap());
        if let Some(json) = setup_json {
            state.ensure_dir();
            std::fs::write(state.setup_path(), json).unwrap();
        }
        Fixture {
            journal: EventJournal::new(state.clone()),
            state,
            _tmp: tmp,
        }
    }

    fn pg() -> PgConfig {
        PgConfig {
            host: "localhost".to_string(),
            port: "5432".to_string(),
            database: "agent_memory".to_string(),
            user: "tester".to_string(),
        }
    }

    fn journaled(fixture: &Fixture) -> Vec<JournalEntry> {
        let raw = std::fs::read_to_string(fixture.state.events_path()).unwrap_or_default();
        raw.lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_no_setup_skips_everything() {
        let fx = fixture(None);
        let client = RecordingClient::default();

        verify_setup(
            &fx.state,
            &fx.journal,
            &pg(),
            &OkRunner::default(),
            &client,
            &StubProbe(true),
            "/work",
        );

        assert!(journaled(&fx).is_empty());
        assert!(client.toasts().is_empty());
    }

    #[test]
    fn test_setup_without_selection_skips_everything() {
        let fx = fixture(Some(r#"{"version": 2}"#));
        let client = RecordingClient::default();

        verify_setup(
            &fx.state,
            &fx.journal,
            &pg(),
            &OkRunner::default(),
            &client,
            &StubProbe(true),
            "/work",
        );

        assert!(journaled(&fx).is_empty());
        assert!(client.toasts().is_empty());
    }

    #[test]
    fn test_unreachable_store_records_false_and_warns() {
        let fx = fixture(Some(r#"{"selected": {"pgvector": true, "ollama": false}}"#));
        let client = RecordingClient::default();

        verify_setup(
            &fx.state,
            &fx.journal,
            &pg(),
            &FailRunner,
            &client,
            &StubProbe(true),
            "/work",
        );

        let entries = journaled(&fx);
        assert_eq!(entries.len(), 1);
        match &entries[0].event {
            JournalEvent::SetupVerified { results, .. } => {
                assert_eq!(results.pgvector, Some(false));
                assert_eq!(results.ollama, None);
            }
            other => panic!("unexpected entry: {:?}", other),
        }

        let toasts = client.toasts();
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].message.contains("pgvector"));
    }

    #[test]
    fn test_healthy_capabilities_record_true_without_toasts() {
        let fx = fixture(Some(r#"{"selected": {"pgvector": true, "ollama": true}}"#));
        let client = RecordingClient::default();
        let runner = OkRunner::default();

        verify_setup(
            &fx.state, &fx.journal, &pg(), &runner, &client, &StubProbe(true), "/work",
        );

        let entries = journaled(&fx);
        assert_eq!(entries.len(), 1);
        match &entries[0].event {
            JournalEvent::SetupVerified { selected, results } => {
                assert!(selected.pgvector && selected.ollama);
                assert_eq!(results.pgvector, Some(true));
                assert_eq!(results.ollama, Some(true));
            }
            other => panic!("unexpected entry: {:?}", other),
        }
        assert!(client.toasts().is_empty());

        // The store check targeted psql with the extension query
        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "psql");
        assert!(calls[0].1.last().unwrap().contains("pg_extension"));
    }

    #[test]
    fn test_unreachable_ollama_warns() {
        let fx = fixture(Some(r#"{"selected": {"pgvector": false, "ollama": true}}"#));
        let client = RecordingClient::default();

        verify_setup(
            &fx.state,
            &fx.journal,
            &pg(),
            &OkRunner::default(),
            &client,
            &StubProbe(false),
            "/work",
        );

        let entries = journaled(&fx);
        assert_eq!(entries.len(), 1);
        match &entries[0].event {
            JournalEvent::SetupVerified { results, .. } => {
                assert_eq!(results.pgvector, None);
                assert_eq!(results.ollama, Some(false));
            }
            other => panic!("unexpected entry: {:?}", other),
        }

        let toasts = client.toasts();
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].message.contains("11434"));
    }
}
