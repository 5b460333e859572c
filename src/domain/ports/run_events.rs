//! Run Event Port
//!
//! Observable progress of one generation run. Enables console progress,
//! NDJSON event streams, and debugging.

use std::path::PathBuf;

/// Pipeline stage that calls the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Code,
    Attributes,
    Css,
    Fix,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Code => "code",
            Stage::Attributes => "attributes",
            Stage::Css => "css",
            Stage::Fix => "fix",
        }
    }

    /// Human label shown while the stage runs
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Code => "Generating code",
            Stage::Attributes => "Generating copy",
            Stage::Css => "Generating styles",
            Stage::Fix => "Fixing",
        }
    }
}

/// Event emitted during a run
#[derive(Debug, Clone)]
pub enum RunEvent {
    /// Run started
    Started { model: String, description: String },

    /// Artifact folder chosen once the component name is known
    RunDirCreated { run_dir: PathBuf },

    /// A model-backed stage started
    StageStarted { stage: Stage },

    /// An artifact file was written
    ArtifactWritten { path: PathBuf },

    /// A POST to the content server returned
    Submitted {
        attempt: u32,
        status: u16,
        accepted: bool,
    },

    /// A rejected revision was replaced by a repaired one
    Repaired { attempt: u32, revision: PathBuf },

    /// Run finished; `accepted` is `None` when submission was skipped
    Completed {
        component_name: String,
        run_dir: PathBuf,
        accepted: Option<bool>,
        attempts: u32,
    },
}

/// Trait for receiving run events
///
/// Implementations:
/// - console sink: progress lines in the terminal
/// - `JsonEventSink`: NDJSON stream
/// - `NoopEventSink`: silent operation
pub trait RunEventSink: Send + Sync {
    fn on_event(&self, event: RunEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RunEventSink for NoopEventSink {
    fn on_event(&self, _event: RunEvent) {}
}
