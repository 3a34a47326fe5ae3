//! Session-compacting hook: record the compaction and feed context back.
//!
//! Journals the occurrence, appends the setup/memory context blocks for
//! the host to splice into the compaction prompt, and fires one
//! best-effort store_memory write. Never exits nonzero on pipeline
//! failure; only a broken stdout (host gone) ends the hook early.

use agent_memory::{MemoryPlugin, PluginDeps};
use anyhow::Result;
use hook_common::{project_dir, CompactingInput, CompactionOutput};

fn main() -> Result<()> {
    // Tolerate absent or malformed input; an empty session id still gets
    // journaled and produces context blocks.
    let input = CompactingInput::from_stdin().unwrap_or_default();

    let plugin = MemoryPlugin::new(PluginDeps::production(project_dir()));
    let mut output = CompactionOutput::new();
    plugin.on_session_compacting(&input, &mut output);

    output.write_stdout()?;
    Ok(())
}
