//! Common plumbing for agent-memory hooks.
//!
//! This crate provides the pieces every hook binary shares:
//! - JSON input/output parsing for the host's hook protocol
//! - Subprocess execution behind a swappable runner trait
//! - The host client surface (toast notifications, log forwarding)

pub mod host;
pub mod input;
pub mod output;
pub mod subprocess;

pub use host::{HostClient, LogParams, StderrClient, ToastParams, ToastVariant};
pub use input::{project_dir, CompactingInput, HostEvent};
pub use output::CompactionOutput;
pub use subprocess::{CommandResult, CommandRunner, SystemRunner};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::host::{HostClient, LogParams, StderrClient, ToastParams, ToastVariant};
    pub use crate::input::{project_dir, CompactingInput, HostEvent};
    pub use crate::output::CompactionOutput;
    pub use crate::subprocess::{CommandResult, CommandRunner, SystemRunner};
    pub use anyhow::{Context, Result};
    pub use serde::{Deserialize, Serialize};
}
