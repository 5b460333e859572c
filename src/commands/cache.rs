//! Cache command - inspect the response cache

use anyhow::{Context, Result};

use cardsmith::config::Config;
use cardsmith::presentation::factory::create_cache;

use crate::cli::CacheAction;
use crate::ui::context::UiContext;
use crate::ui::views::cache::render_cache_stats;

pub fn cmd_cache(action: CacheAction, config: &Config, ui: &UiContext) -> Result<()> {
    match action {
        CacheAction::Stats => {
            let cache = create_cache(config);
            let stats = cache
                .stats()
                .with_context(|| format!("reading cache at {}", cache.dir().display()))?;

            if ui.json {
                crate::ui::json::emit(serde_json::json!({
                    "event": "cache_stats",
                    "dir": cache.dir().display().to_string(),
                    "entries": stats.entries,
                    "bytes": stats.bytes,
                }))?;
            } else {
                print!("{}", render_cache_stats(cache.dir(), &stats, ui.color));
            }
            Ok(())
        }
    }
}
