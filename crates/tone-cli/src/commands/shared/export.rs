use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chrono::Utc;
use tone_core::HistoryLedger;

/// Where an export lands: the explicit path, or a timestamped file in
/// `export_dir`.
#[must_use]
pub fn export_path(explicit: Option<&str>, export_dir: &str) -> PathBuf {
    explicit.map_or_else(
        || Path::new(export_dir).join(tone_csv::export_file_name(Utc::now())),
        PathBuf::from,
    )
}

/// Write `ledger` as CSV and return the path written.
pub fn write_export(
    ledger: &HistoryLedger,
    explicit: Option<&str>,
    export_dir: &str,
) -> anyhow::Result<PathBuf> {
    if ledger.is_empty() {
        bail!("nothing to export: the history is empty");
    }

    let path = export_path(explicit, export_dir);
    write_text(&path, &tone_csv::export_ledger(ledger))?;
    tracing::info!(path = %path.display(), rows = ledger.len(), "wrote csv export");
    Ok(path)
}

/// Write `contents` to `path`, creating missing parent directories.
pub fn write_text(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))
}
