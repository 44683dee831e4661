//! Tool capabilities declared by agents.
//!
//! Capabilities are declared metadata: they are part of an agent's
//! configuration and are named in its system prompt, but the execution
//! layer is text-in/text-out and does not perform function calling. The
//! environment hosting the agent is responsible for actually providing
//! the capability.

use serde::{Deserialize, Serialize};

/// A capability an agent declares but does not implement itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCapability {
    /// Read a single file.
    FileRead,
    /// List the contents of a directory.
    DirectoryRead,
    /// Execute a snippet of code in a sandbox.
    CodeInterpreter,
}

impl ToolCapability {
    /// Capability name as declared to the execution environment.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FileRead => "file_read",
            Self::DirectoryRead => "directory_read",
            Self::CodeInterpreter => "code_interpreter",
        }
    }

    /// One-line description for prompts.
    pub fn description(&self) -> &'static str {
        match self {
            Self::FileRead => "read the contents of a file",
            Self::DirectoryRead => "list the contents of a directory",
            Self::CodeInterpreter => "execute code in a sandboxed interpreter",
        }
    }
}

impl std::fmt::Display for ToolCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
