use std::path::Path;

use cardsmith::infrastructure::CacheStats;

use crate::ui::primitives::text::ColoredText;

pub fn render_cache_stats(dir: &Path, stats: &CacheStats, color: bool) -> String {
    format!(
        "{} {}\n  entries: {}\n  size:    {}\n",
        ColoredText::info("Response cache").bold().render(color),
        ColoredText::dim(dir.display().to_string()).render(color),
        stats.entries,
        human_bytes(stats.bytes)
    )
}

fn human_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}
