//! JSON Event Sink
//!
//! Outputs run events as NDJSON for scripts and CI.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{RunEvent, RunEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// NDJSON form of a run event
pub fn event_json(event: &RunEvent) -> serde_json::Value {
    match event {
        RunEvent::Started { model, description } => serde_json::json!({
            "event": "run_started",
            "model": model,
            "description": description,
        }),

        RunEvent::RunDirCreated { run_dir } => serde_json::json!({
            "event": "run_dir",
            "path": run_dir.display().to_string(),
        }),

        RunEvent::StageStarted { stage } => serde_json::json!({
            "event": "stage",
            "stage": stage.as_str(),
        }),

        RunEvent::ArtifactWritten { path } => serde_json::json!({
            "event": "artifact",
            "path": path.display().to_string(),
        }),

        RunEvent::Submitted {
            attempt,
            status,
            accepted,
        } => serde_json::json!({
            "event": "submission",
            "attempt": attempt,
            "status": status,
            "accepted": accepted,
        }),

        RunEvent::Repaired { attempt, revision } => serde_json::json!({
            "event": "repaired",
            "attempt": attempt,
            "revision": revision.display().to_string(),
        }),

        RunEvent::Completed {
            component_name,
            run_dir,
            accepted,
            attempts,
        } => serde_json::json!({
            "event": "complete",
            "component_name": component_name,
            "run_dir": run_dir.display().to_string(),
            "accepted": accepted,
            "attempts": attempts,
        }),
    }
}

impl RunEventSink for JsonEventSink {
    fn on_event(&self, event: RunEvent) {
        self.write_event(event_json(&event));
    }
}
