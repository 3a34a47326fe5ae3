//! Generic event hook: record completed compactions.
//!
//! Reacts only to `session.compacted`; every other event tag is a no-op.

use agent_memory::{MemoryPlugin, PluginDeps};
use anyhow::Result;
use hook_common::{project_dir, HostEvent};

fn main() -> Result<()> {
    // An event we cannot parse is an event we were not meant to handle.
    let Ok(event) = HostEvent::from_stdin() else {
        return Ok(());
    };

    let plugin = MemoryPlugin::new(PluginDeps::production(project_dir()));
    plugin.on_event(&event);
    Ok(())
}
