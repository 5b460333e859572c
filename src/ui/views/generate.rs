use cardsmith::domain::entities::Artifact;
use cardsmith::GenerateResult;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn fixes(n: u32) -> String {
    match n {
        0 => "with no fixes".to_string(),
        1 => "after 1 fix".to_string(),
        n => format!("after {} fixes", n),
    }
}

/// Final summary of a run
pub fn render_result(result: &GenerateResult, color: bool, unicode: bool) -> String {
    let name = result.artifact.component_name();
    let arrow = Icon::Arrow.colored(color, unicode);
    let mut out = String::new();

    match &result.submission {
        None => out.push_str(&format!(
            "{} {}\n",
            Icon::Success.colored(color, unicode),
            ColoredText::success(format!("Card {} generated (not submitted)", name))
                .bold()
                .render(color)
        )),
        Some(outcome) if outcome.accepted => {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Success.colored(color, unicode),
                ColoredText::success(format!(
                    "Card {} accepted {}",
                    name,
                    fixes(outcome.fix_count())
                ))
                .bold()
                .render(color)
            ));
            if let Some(id) = outcome.resource_id() {
                out.push_str(&format!("  {} id:   {}\n", arrow, id));
            }
            out.push_str(&format!(
                "  {} card: {}\n",
                arrow,
                outcome.card_path.display()
            ));
        }
        Some(outcome) => {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Error.colored(color, unicode),
                ColoredText::error(format!(
                    "Card {} rejected after {} attempts (HTTP {})",
                    name, outcome.attempts, outcome.response.status
                ))
                .bold()
                .render(color)
            ));
            out.push_str(&format!(
                "  {} card: {}\n",
                arrow,
                outcome.card_path.display()
            ));
        }
    }

    out.push_str(&format!("  {} run:  {}\n", arrow, result.run_dir.display()));

    if let Some(outcome) = result.submission.as_ref().filter(|o| !o.accepted) {
        out.push('\n');
        out.push_str(&ColoredText::dim("Server response:").render(color));
        out.push('\n');
        out.push_str(outcome.response.body.trim_end());
        out.push('\n');
    }

    out
}

/// Code, field copy and styles of an artifact, one section each
pub fn render_artifact(artifact: &Artifact, color: bool) -> String {
    let mut out = String::new();
    let mut section = |title: &str, body: &str| {
        out.push_str(&ColoredText::info(format!("── {} ──", title)).bold().render(color));
        out.push('\n');
        out.push_str(body.trim_end());
        out.push_str("\n\n");
    };

    section("code", artifact.code());
    let attributes = serde_json::to_string_pretty(artifact.attributes())
        .unwrap_or_else(|_| "{}".to_string());
    section("data", &attributes);
    if let Some(css) = artifact.css() {
        section("style", css);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsmith::domain::entities::{ServerResponse, SubmissionDocument, SubmissionState};
    use cardsmith::domain::value_objects::FilenameFragment;
    use cardsmith::SubmitOutcome;
    use serde_json::{Map, Value};
    use std::path::PathBuf;

    fn result(status: u16, body: &str, accepted: bool, attempts: u32) -> GenerateResult {
        let fragment = FilenameFragment::parse("todo_list").unwrap();
        let mut attrs = Map::new();
        attrs.insert("title".to_string(), Value::from("Homework"));
        let document =
            SubmissionDocument::new("http://localhost:4202/", &fragment, "TodoList", attrs.clone());

        GenerateResult {
            run_dir: PathBuf::from(".cardsmith/runs/todo_list-20240101-120000"),
            fragment,
            artifact: Artifact::new("export class TodoList extends Card {}", "TodoList", attrs),
            submission: Some(SubmitOutcome {
                accepted,
                attempts,
                states: vec![SubmissionState::Built],
                document,
                response: ServerResponse::new(status, body),
                final_code: "export class TodoList extends Card {}".to_string(),
                card_path: PathBuf::from("demo-cards/todo_list.gts"),
                revisions: Vec::new(),
            }),
            files: Vec::new(),
        }
    }

    #[test]
    fn accepted_run_reports_id() {
        let r = result(201, r#"{"data":{"id":"http://localhost:4202/TodoList/1"}}"#, true, 2);

        let rendered = render_result(&r, false, false);

        insta::assert_snapshot!(rendered, @r"
        [OK] Card TodoList accepted after 1 fix
          [>] id:   http://localhost:4202/TodoList/1
          [>] card: demo-cards/todo_list.gts
          [>] run:  .cardsmith/runs/todo_list-20240101-120000
        ");
    }

    #[test]
    fn rejected_run_prints_raw_response() {
        let r = result(500, "Unexpected token (3:4)", false, 2);

        let rendered = render_result(&r, false, false);

        assert!(rendered.starts_with("[FAIL] Card TodoList rejected after 2 attempts (HTTP 500)"));
        assert!(rendered.ends_with("Server response:\nUnexpected token (3:4)\n"));
    }

    #[test]
    fn unsubmitted_run() {
        let mut r = result(201, "", true, 1);
        r.submission = None;

        let rendered = render_result(&r, false, true);

        assert!(rendered.starts_with("✓ Card TodoList generated (not submitted)\n"));
    }

    #[test]
    fn artifact_sections() {
        let r = result(201, "", true, 1);
        let artifact = r.artifact.clone().with_css("h1 { color: red; }");

        let rendered = render_artifact(&artifact, false);

        assert!(rendered.contains("── code ──\nexport class TodoList"));
        assert!(rendered.contains("\"title\": \"Homework\""));
        assert!(rendered.contains("── style ──\nh1 { color: red; }"));
    }
}
