//! Models command - the context-length table and output budgets

use anyhow::Result;
use serde_json::{json, Value};

use cardsmith::config::Config;
use cardsmith::domain::value_objects::ModelTable;

use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::models::render_models;

pub fn models_event(table: &ModelTable, current: &str) -> Value {
    let models: Vec<Value> = table
        .iter()
        .map(|(name, context_length)| {
            json!({
                "model": name,
                "context_length": context_length,
                "max_output_tokens": table.max_output_tokens(name).ok(),
                "current": name == current,
            })
        })
        .collect();

    json!({
        "event": "models",
        "reserved_example_tokens": table.reserved_example_tokens(),
        "models": models,
    })
}

pub fn cmd_models(config: &Config, ui: &UiContext) -> Result<()> {
    let table = config.model_table();

    if ui.json {
        crate::ui::json::emit(models_event(&table, &config.llm.model))?;
        return Ok(());
    }

    print!("{}", render_models(&table, &config.llm.model, ui.color));
    if !table.contains(&config.llm.model) {
        eprintln!(
            "\n{}",
            ColoredText::warning(format!(
                "Configured model '{}' is not in the table; add it under [llm.models].",
                config.llm.model
            ))
            .render(ui.color)
        );
    }
    Ok(())
}
