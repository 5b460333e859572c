use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Cardsmith - prompt-chaining card generator
#[derive(Parser, Debug)]
#[command(name = "cardsmith")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'cardsmith' without arguments to generate a card interactively.")]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./cardsmith.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a card, submit it, and repair it if the server rejects it
    Generate(GenerateArgs),

    /// Write a cardsmith.toml template and a starter example card
    Init {
        /// Overwrite an existing cardsmith.toml
        #[arg(short, long)]
        force: bool,
    },

    /// List known models with their output token budgets
    Models,

    /// Inspect the response cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// What the card is for (e.g. "a todo list with checkable items")
    #[arg(short, long)]
    pub description: String,

    /// Who uses it and how; drives the generated field copy
    #[arg(short, long)]
    pub use_case: String,

    /// Style description; generates style.css when given
    #[arg(short, long)]
    pub style: Option<String>,

    /// Card module name (default: derived from the component name)
    #[arg(short, long)]
    pub fragment: Option<String>,

    /// Model identifier (overrides llm.model)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Content server base URL (overrides server.url)
    #[arg(long, value_name = "URL")]
    pub server_url: Option<String>,

    /// Folder the content server loads cards from (overrides paths.cards_dir)
    #[arg(long, value_name = "DIR")]
    pub cards_dir: Option<PathBuf>,

    /// Generate only; do not POST to the content server
    #[arg(long)]
    pub no_submit: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheAction {
    /// Entry count and total size of the cache folder
    Stats,
}
