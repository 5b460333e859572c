//! Init command - write a project config and a starter example card

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use cardsmith::config::{Config, PROJECT_CONFIG_FILE};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

const CONFIG_TEMPLATE: &str = r#"# Cardsmith configuration
#
# Every key is optional; the values below are the defaults.
# Environment variables (CARDSMITH_MODEL, CARDSMITH_SERVER_URL, ...) override
# this file, and command-line flags override both.

[llm]
model = "gpt-3.5-turbo"
base_url = "https://api.openai.com"
# Environment variable holding the API key
api_key_env = "OPENAI_API_KEY"
# Sent as the system message with every prompt
# system_prompt = "You write glimmer card templates."
# Tokens kept free for the example card embedded in prompts
reserved_example_tokens = 2500

# Context lengths, merged over the built-in table
# [llm.models]
# "my-local-model" = 16384

[server]
url = "http://localhost:4202/"
# Status code that means the card was accepted
success_status = 201

[retry]
# POSTs per card, including the first one
max_attempts = 2
delay_ms = 0

[paths]
example = "demo-cards/example.gts"
cards_dir = "demo-cards"
runs_dir = ".cardsmith/runs"
cache_dir = ".cardsmith/cache"

[http]
timeout_secs = 120

[output]
# auto | always | never
color = "auto"
unicode = true
"#;

const EXAMPLE_CARD: &str = r#"import {
  contains,
  field,
  Card,
  Component,
} from 'https://cardstack.com/base/card-api';
import StringCard from 'https://cardstack.com/base/string';
import TextAreaCard from 'https://cardstack.com/base/text-area';
import { CardContainer, FieldContainer } from '@cardstack/boxel-ui';

export class Announcement extends Card {
  @field title = contains(StringCard);
  @field body = contains(TextAreaCard);

  static isolated = class Isolated extends Component<typeof this> {
    <template>
      <CardContainer class='announcement'>
        <h1><@fields.title /></h1>
        <p><@fields.body /></p>
      </CardContainer>
    </template>
  };

  static edit = class Edit extends Component<typeof this> {
    <template>
      <CardContainer class='announcement'>
        <FieldContainer @label='Title'><@fields.title /></FieldContainer>
        <FieldContainer @label='Body'><@fields.body /></FieldContainer>
      </CardContainer>
    </template>
  };
}
"#;

/// What `init` wrote
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InitReport {
    pub config: PathBuf,
    /// `None` when an example card already existed
    pub example: Option<PathBuf>,
}

pub fn init_project(root: &Path, force: bool) -> Result<InitReport> {
    let config_path = root.join(PROJECT_CONFIG_FILE);
    if config_path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("writing {}", config_path.display()))?;

    let example_path = root.join(Config::default().paths.example);
    let example = if example_path.exists() {
        None
    } else {
        if let Some(parent) = example_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&example_path, EXAMPLE_CARD)
            .with_context(|| format!("writing {}", example_path.display()))?;
        Some(example_path)
    };

    Ok(InitReport {
        config: config_path,
        example,
    })
}

pub fn cmd_init(root: &Path, force: bool, ui: &UiContext) -> Result<()> {
    let report = init_project(root, force)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "config": report.config.display().to_string(),
            "example": report.example.as_ref().map(|p| p.display().to_string()),
        }))?;
        return Ok(());
    }

    let ok = Icon::Success.colored(ui.color, ui.unicode);
    println!("{} Created {}", ok, report.config.display());
    if let Some(example) = &report.example {
        println!("{} Created {}", ok, example.display());
    }
    println!();
    println!(
        "{} Next: export OPENAI_API_KEY, then run `cardsmith generate --description ... --use-case ...`",
        Icon::Arrow.colored(ui.color, ui.unicode)
    );

    Ok(())
}
