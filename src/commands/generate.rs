//! Generate command - one run from the command line

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use cardsmith::application::generate::FIRST_REVISION_FILE;
use cardsmith::config::Config;
use cardsmith::domain::ports::RunEventSink;
use cardsmith::infrastructure::JsonEventSink;
use cardsmith::presentation::create_generate_use_case;
use cardsmith::{GenerateOptions, GenerateResult};

use crate::cli::GenerateArgs;
use crate::ui::components::diff::render_revision_diff;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::progress::ConsoleEventSink;
use crate::ui::views::generate::render_result;

/// Apply per-run flags on top of the loaded configuration
pub fn apply_overrides(config: &mut Config, args: &GenerateArgs) {
    if let Some(model) = args.model.as_ref().filter(|m| !m.is_empty()) {
        config.llm.model = model.clone();
    }
    if let Some(url) = args.server_url.as_ref().filter(|u| !u.is_empty()) {
        config.server.url = url.clone();
    }
    if let Some(dir) = &args.cards_dir {
        config.paths.cards_dir = dir.clone();
    }
}

pub fn options_from_args(args: &GenerateArgs) -> GenerateOptions {
    GenerateOptions::new(&args.description, &args.use_case)
        .with_style(args.style.clone())
        .with_fragment(args.fragment.clone())
        .with_submit(!args.no_submit)
}

/// Returns `false` when the server finally rejected the card
pub fn cmd_generate(args: &GenerateArgs, mut config: Config, ui: &UiContext) -> Result<bool> {
    apply_overrides(&mut config, args);
    let result = run(&config, &options_from_args(args), ui)?;
    report(&result, ui)?;
    Ok(result.is_success())
}

/// Build the pipeline from `config` and execute it with the matching event sink
pub fn run(config: &Config, options: &GenerateOptions, ui: &UiContext) -> Result<GenerateResult> {
    let use_case = create_generate_use_case(config).context("setting up the pipeline")?;

    let sink: Arc<dyn RunEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(ui))
    };

    use_case
        .execute_with_events(options, sink)
        .with_context(|| format!("generating a card for '{}'", options.description))
}

/// Print the summary (or the `result` event) and, with `-v`, the repair diffs
pub fn report(result: &GenerateResult, ui: &UiContext) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(result_event(result))?;
        return Ok(());
    }

    println!();
    print!("{}", render_result(result, ui.color, ui.unicode));

    if ui.verbose > 0 {
        for diff in revision_diffs(result, ui.color) {
            println!();
            println!("{} Repair diff", Icon::Diff.colored(ui.color, ui.unicode));
            print!("{}", diff);
        }
    }

    Ok(())
}

pub fn result_event(result: &GenerateResult) -> Value {
    let mut event = json!({
        "event": "result",
        "component_name": result.artifact.component_name(),
        "fragment": result.fragment.as_str(),
        "run_dir": result.run_dir.display().to_string(),
        "submitted": result.was_submitted(),
        "success": result.is_success(),
        "fixes": result.fix_count(),
        "files": result.files.iter().map(|f| f.display().to_string()).collect::<Vec<_>>(),
    });

    if let Some(outcome) = &result.submission {
        event["status"] = json!(outcome.response.status);
        event["card_path"] = json!(outcome.card_path.display().to_string());
        event["id"] = json!(outcome.resource_id());
        if !outcome.accepted {
            event["response"] = json!(outcome.response.body);
        }
    }

    event
}

/// Diffs between consecutive revisions: `v1.gts`, then every repaired one
fn revision_diffs(result: &GenerateResult, color: bool) -> Vec<String> {
    let mut revisions: Vec<PathBuf> = vec![result.run_dir.join(FIRST_REVISION_FILE)];
    if let Some(outcome) = &result.submission {
        revisions.extend(outcome.revisions.iter().cloned());
    }

    let mut contents = Vec::new();
    for path in revisions {
        match fs::read_to_string(&path) {
            Ok(code) => contents.push((path, code)),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "cannot read revision"),
        }
    }

    contents
        .windows(2)
        .map(|pair| {
            let (old_path, old) = &pair[0];
            let (new_path, new) = &pair[1];
            render_revision_diff(&label(old_path), &label(new_path), old, new, color)
        })
        .collect()
}

fn label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
