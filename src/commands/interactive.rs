//! Interactive mode - prompt for the run inputs, then generate

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

use cardsmith::config::Config;
use cardsmith::domain::value_objects::ModelTable;
use cardsmith::GenerateOptions;

use crate::commands::generate;
use crate::ui::context::UiContext;
use crate::ui::theme::CardsmithTheme;
use crate::ui::views::generate::render_artifact;

/// Everything the prompts collect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub model: String,
    pub fragment: String,
    pub description: String,
    pub use_case: String,
    pub style: String,
    pub submit: bool,
}

impl Answers {
    pub fn to_options(&self) -> GenerateOptions {
        GenerateOptions::new(self.description.trim(), self.use_case.trim())
            .with_fragment(Some(self.fragment.trim().to_string()))
            .with_style(Some(self.style.trim().to_string()))
            .with_submit(self.submit)
    }
}

/// Index of the configured model in the table's listing, or the first entry
pub fn default_model_index(table: &ModelTable, model: &str) -> usize {
    table
        .model_names()
        .iter()
        .position(|name| *name == model)
        .unwrap_or(0)
}

#[allow(clippy::ptr_arg)]
fn not_blank(input: &String) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("Please enter a value")
    } else {
        Ok(())
    }
}

fn ask(theme: &CardsmithTheme, config: &Config) -> Result<Answers> {
    let table = config.model_table();
    let names = table.model_names();

    let model = Select::with_theme(theme)
        .with_prompt("Model")
        .items(&names)
        .default(default_model_index(&table, &config.llm.model))
        .interact()?;

    let fragment: String = Input::with_theme(theme)
        .with_prompt("Filename fragment (blank: derive from the component name)")
        .allow_empty(true)
        .interact_text()?;

    let description: String = Input::with_theme(theme)
        .with_prompt("What is the card for?")
        .validate_with(not_blank)
        .interact_text()?;

    let use_case: String = Input::with_theme(theme)
        .with_prompt("Who uses it, and how?")
        .validate_with(not_blank)
        .interact_text()?;

    let style: String = Input::with_theme(theme)
        .with_prompt("Style (blank: no CSS)")
        .allow_empty(true)
        .interact_text()?;

    let submit = Confirm::with_theme(theme)
        .with_prompt(format!("Submit to {}?", config.server.url))
        .default(true)
        .interact()?;

    Ok(Answers {
        model: names[model].to_string(),
        fragment,
        description,
        use_case,
        style,
        submit,
    })
}

/// Returns `false` when the server finally rejected the card
pub fn cmd_interactive(mut config: Config, ui: &UiContext) -> Result<bool> {
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "interactive",
            "state": "unavailable",
            "message": "no command provided",
        }))?;
        return Ok(true);
    }

    if !ui.caps.is_interactive() {
        println!("No command provided.");
        println!("Try: `cardsmith generate --description <D> --use-case <U>` or `cardsmith --help`");
        return Ok(true);
    }

    let theme = CardsmithTheme::new(ui.unicode);
    let answers = ask(&theme, &config)?;
    config.llm.model = answers.model.clone();

    let result = generate::run(&config, &answers.to_options(), ui)?;

    println!();
    print!("{}", render_artifact(&result.artifact, ui.color));
    generate::report(&result, ui)?;

    Ok(result.is_success())
}
