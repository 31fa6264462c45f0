//! Standalone HTML output for charts.

use anyhow::Context;
use plotly::Plot;
use std::fs;
use std::path::Path;

/// Write `plot` to `path` as a self-contained page, creating parent directories.
pub fn write_html(plot: &Plot, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, plot.to_html()).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
