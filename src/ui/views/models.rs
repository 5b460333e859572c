use cardsmith::domain::value_objects::ModelTable;

use crate::ui::primitives::text::ColoredText;

/// Model table with context lengths and output budgets; `current` is marked
pub fn render_models(table: &ModelTable, current: &str, color: bool) -> String {
    let name_width = table
        .model_names()
        .iter()
        .map(|n| n.len())
        .max()
        .unwrap_or(5)
        .max("MODEL".len());

    let mut out = format!(
        "  {:<width$}  {:>8}  {:>8}\n",
        "MODEL",
        "CONTEXT",
        "OUTPUT",
        width = name_width
    );

    for (name, context_length) in table.iter() {
        let budget = table
            .max_output_tokens(name)
            .map(|b| b.to_string())
            .unwrap_or_else(|_| "-".to_string());
        let marker = if name == current { "*" } else { " " };
        let line = format!(
            "{} {:<width$}  {:>8}  {:>8}",
            marker,
            name,
            context_length,
            budget,
            width = name_width
        );
        if name == current {
            out.push_str(&ColoredText::info(line).bold().render(color));
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }

    out.push_str(&ColoredText::dim(format!(
        "\n{} tokens reserved for the example card\n",
        table.reserved_example_tokens()
    ))
    .render(color));
    out
}
