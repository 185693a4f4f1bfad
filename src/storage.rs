use crate::model::Report;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Write the report as pretty JSON.
pub fn export_json(path: &Path, report: &Report) -> Result<()> {
    ensure_parent(path)?;
    let data = serde_json::to_vec_pretty(report).context("serialize report")?;
    fs::write(path, data).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), "exported JSON report");
    Ok(())
}

/// Write an already rendered SVG document.
pub fn export_svg(path: &Path, svg: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, svg).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), "exported SVG dashboard");
    Ok(())
}
