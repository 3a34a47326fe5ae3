//! Best-effort memory persistence against the external store.

use crate::attempt;
use crate::journal::now_utc;
use crate::pg::PgConfig;
use crate::sql::escape_literal;
use hook_common::CommandRunner;

/// Source identifier recorded with every persisted memory.
const SOURCE: &str = "agent-memory-hooks";

/// Fixed relevance weight for compaction memories.
const RELEVANCE: &str = "7.0";

/// Build the single `store_memory` call for one compaction occurrence.
///
/// Nine positional arguments: category, subtype, tags, title, body,
/// metadata, source, session id, relevance. The three variable values are
/// escaped for their single-quoted literal positions; nothing else is
/// neutralized (see DESIGN.md on the known limits of this escaping).
pub fn build_store_memory_sql(session_id: &str, cwd: &str, time_utc: &str) -> String {
    let sid = escape_literal(session_id);
    let cwd = escape_literal(cwd);
    let time = escape_literal(time_utc);
    format!(
        "SELECT store_memory('episodic','compaction',ARRAY['compaction','agent-memory'],\
'Session Compaction {sid} {time}',\
'session_id={sid} cwd={cwd} time_utc={time}',\
jsonb_build_object('session_id','{sid}','cwd','{cwd}','time_utc','{time}','source','{SOURCE}'),\
'{SOURCE}','{sid}',{RELEVANCE});"
    )
}

/// Fire one `store_memory` write for the session. At most one attempt;
/// every failure is discarded — the store is optional and the calling
/// hook must not notice it being away.
pub fn persist(runner: &dyn CommandRunner, pg: &PgConfig, directory: &str, session_id: &str) {
    let sql = build_store_memory_sql(session_id, directory, &now_utc());
    attempt(|| runner.run("psql", &pg.psql_args(&sql)));
}
