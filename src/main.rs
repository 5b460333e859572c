//! Cardsmith CLI - prompt-chaining card generator
//!
//! Usage: cardsmith [COMMAND]
//!
//! Commands:
//!   generate  Generate a card, submit it, and repair it on rejection
//!   init      Write a cardsmith.toml template and a starter example card
//!   models    List known models with their output token budgets
//!   cache     Inspect the response cache
//!
//! Exit codes: 0 on success, 1 on errors, 2 when the content server
//! rejected the final revision.

mod cli;
mod commands;
mod logging;
mod ui;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use cardsmith::config::Config;

use cli::{Cli, Commands};
use ui::context::UiContext;

const EXIT_REJECTED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let json = cli.json;
    let command = command_name(cli.command.as_ref());

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_REJECTED),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            ui::error::print_error(&err, command, json);
            ExitCode::FAILURE
        }
    }
}

fn command_name(command: Option<&Commands>) -> &'static str {
    match command {
        None => "interactive",
        Some(Commands::Generate(_)) => "generate",
        Some(Commands::Init { .. }) => "init",
        Some(Commands::Models) => "models",
        Some(Commands::Cache { .. }) => "cache",
    }
}

fn load_config(cwd: &Path, explicit: Option<&Path>, json: bool, verbose: u8) -> Result<Config> {
    let (config, warnings) = Config::discover(cwd, explicit).context("loading configuration")?;
    if !warnings.is_empty() {
        let ctx = UiContext::new(json, verbose, &config);
        ui::output::print_config_warnings(&warnings, ctx.color, ctx.unicode);
    }
    Ok(config)
}

/// Dispatch; `Ok(false)` means the card was finally rejected
fn run(cli: Cli) -> Result<bool> {
    let cwd = std::env::current_dir().context("reading the working directory")?;

    // init must work even when the existing config is broken
    if let Some(Commands::Init { force }) = cli.command {
        let config = Config::discover(&cwd, cli.config.as_deref())
            .map(|(config, _)| config)
            .unwrap_or_default();
        let ui = UiContext::new(cli.json, cli.verbose, &config);
        commands::init::cmd_init(&cwd, force, &ui)?;
        return Ok(true);
    }

    let config = load_config(&cwd, cli.config.as_deref(), cli.json, cli.verbose)?;
    let ui = UiContext::new(cli.json, cli.verbose, &config);
    tracing::debug!(model = %config.llm.model, server = %config.server.url, "configuration loaded");

    match cli.command {
        None => commands::interactive::cmd_interactive(config, &ui),
        Some(Commands::Generate(args)) => commands::generate::cmd_generate(&args, config, &ui),
        Some(Commands::Models) => commands::models::cmd_models(&config, &ui).map(|()| true),
        Some(Commands::Cache { action }) => {
            commands::cache::cmd_cache(action, &config, &ui).map(|()| true)
        }
        Some(Commands::Init { .. }) => Ok(true),
    }
}
