//! Console progress for generation runs

use std::io::{self, Write};
use std::sync::Mutex;

use cardsmith::domain::ports::{RunEvent, RunEventSink, Stage};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Event sink printing one line per run event
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    pub fn stdout(ui: &UiContext) -> Self {
        Self::with_writer(io::stdout(), ui.color, ui.unicode, ui.verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        color: bool,
        unicode: bool,
        verbose: u8,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            unicode,
            verbose,
        }
    }
}

impl RunEventSink for ConsoleEventSink {
    fn on_event(&self, event: RunEvent) {
        let Some(line) = render_event(&event, self.color, self.unicode, self.verbose) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

fn stage_icon(stage: Stage) -> Icon {
    match stage {
        Stage::Fix => Icon::Fix,
        Stage::Code | Stage::Attributes | Stage::Css => Icon::Code,
    }
}

/// Progress line for an event; `None` for events shown elsewhere or only with `-v`
pub fn render_event(event: &RunEvent, color: bool, unicode: bool, verbose: u8) -> Option<String> {
    match event {
        RunEvent::Started { model, description } => Some(format!(
            "{} Generating a card for {} {}",
            Icon::Progress.colored(color, unicode),
            ColoredText::plain(format!("'{}'", description)).bold().render(color),
            ColoredText::dim(format!("({})", model)).render(color)
        )),

        RunEvent::RunDirCreated { run_dir } => Some(format!(
            "  {} {}",
            Icon::Arrow.colored(color, unicode),
            ColoredText::dim(run_dir.display().to_string()).render(color)
        )),

        RunEvent::StageStarted { stage } => Some(format!(
            "{} {}...",
            stage_icon(*stage).colored(color, unicode),
            stage.label()
        )),

        RunEvent::ArtifactWritten { path } if verbose > 0 => Some(format!(
            "  {} {}",
            Icon::File.colored(color, unicode),
            ColoredText::dim(path.display().to_string()).render(color)
        )),
        RunEvent::ArtifactWritten { .. } => None,

        RunEvent::Submitted {
            attempt,
            status,
            accepted: true,
        } => Some(format!(
            "{} Accepted by content server (attempt {}, HTTP {})",
            Icon::Success.colored(color, unicode),
            attempt,
            status
        )),
        RunEvent::Submitted {
            attempt, status, ..
        } => Some(format!(
            "{} Rejected by content server (attempt {}, HTTP {})",
            Icon::Error.colored(color, unicode),
            attempt,
            status
        )),

        RunEvent::Repaired { attempt, revision } => Some(format!(
            "  {} revision {} saved to {}",
            Icon::Arrow.colored(color, unicode),
            attempt + 1,
            revision.display()
        )),

        RunEvent::Completed { .. } => None,
    }
}
