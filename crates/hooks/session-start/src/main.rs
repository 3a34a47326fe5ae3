//! Plugin-load hook: runs once when the host brings the plugin up.
//!
//! Journals the load, nudges the user when the setup artifact is
//! missing, and verifies whichever optional capabilities setup selected.

use agent_memory::{MemoryPlugin, PluginDeps};
use anyhow::Result;
use hook_common::project_dir;

fn main() -> Result<()> {
    let plugin = MemoryPlugin::new(PluginDeps::production(project_dir()));
    plugin.on_load();
    Ok(())
}
