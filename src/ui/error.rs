use cardsmith::CardsmithError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// First library error in the chain, if any
fn cardsmith_error(err: &anyhow::Error) -> Option<&CardsmithError> {
    err.chain().find_map(|c| c.downcast_ref::<CardsmithError>())
}

/// Suggested fix for errors a user can act on
pub fn hint(err: &CardsmithError) -> Option<String> {
    match err {
        CardsmithError::Completion { message } if message.ends_with("is not set") => Some(
            "Export your API key (e.g. `export OPENAI_API_KEY=...`) or set `llm.api_key_env`."
                .to_string(),
        ),
        CardsmithError::UnknownModel { model, .. } => Some(format!(
            "Add it to cardsmith.toml:\n  [llm.models]\n  \"{}\" = <context length>",
            model
        )),
        CardsmithError::TokenBudget { .. } => {
            Some("Lower `llm.reserved_example_tokens` or choose a larger model.".to_string())
        }
        CardsmithError::Submission { url, .. } => {
            Some(format!("Is the content server running at {}?", url))
        }
        CardsmithError::Fs(cardsmith::domain::ports::FsError::NotFound(path)) => Some(format!(
            "Create {} or point `paths.example` at an existing card (try `cardsmith init`).",
            path.display()
        )),
        CardsmithError::InvalidFragment { .. } => Some(
            "Use letters, digits, '_' or '-' (e.g. --fragment todo_list).".to_string(),
        ),
        CardsmithError::NoExport | CardsmithError::AmbiguousExport { .. } => Some(
            "The model did not return a single card class; run again or refine the description."
                .to_string(),
        ),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(color, unicode),
        ColoredText::error(format!("Error: {}", err)).bold().render(color)
    );

    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(color, unicode),
            cause
        ));
    }

    if let Some(hint) = cardsmith_error(err).and_then(hint) {
        out.push('\n');
        out.push_str(&ColoredText::info(format!("Hint: {}", hint)).render(color));
        out.push('\n');
    }

    out
}

pub fn print_error(err: &anyhow::Error, command: &str, json: bool) {
    if json {
        let _ = crate::ui::json::emit(crate::ui::json::error_event(command, err));
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    let color = caps.supports_color && !caps.is_ci;
    eprint!("{}", format_error(err, color, caps.supports_unicode));
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn chain_is_listed_under_the_headline() {
        let err = Err::<(), _>(CardsmithError::NoExport)
            .context("generating card")
            .unwrap_err();

        let rendered = format_error(&err, false, false);

        assert!(rendered.starts_with("[FAIL] Error: generating card\n"));
        assert!(rendered.contains("[>] no exported component found"));
        assert!(rendered.contains("Hint: The model did not return"));
    }

    #[test]
    fn missing_key_gets_export_hint() {
        let err = CardsmithError::Completion {
            message: "OPENAI_API_KEY is not set".to_string(),
        };
        assert!(hint(&err).unwrap().contains("export OPENAI_API_KEY"));
    }

    #[test]
    fn transport_failure_names_server() {
        let err = CardsmithError::Submission {
            url: "http://localhost:4202/".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            hint(&err).unwrap(),
            "Is the content server running at http://localhost:4202/?"
        );
    }

    #[test]
    fn plain_errors_have_no_hint() {
        let err = anyhow::anyhow!("something else");
        let rendered = format_error(&err, false, true);
        assert!(!rendered.contains("Hint"));
    }
}
