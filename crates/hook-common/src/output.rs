//! Hook output generation for stdout.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Output of the session-compacting hook: context blocks the host splices
/// into the compaction prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompactionOutput {
    /// Context blocks, in push order
    #[serde(default)]
    pub context: Vec<String>,
}

impl CompactionOutput {
    /// Create an empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a context block.
    pub fn push_context(&mut self, block: impl Into<String>) {
        self.context.push(block.into());
    }

    /// Write the output to stdout.
    pub fn write_stdout(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string(self)?;
        io::stdout().write_all(json.as_bytes())?;
        io::stdout().flush()?;
        Ok(())
    }
}
