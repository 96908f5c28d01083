use std::path::Path;

use anyhow::{Context, bail};
use tone_session::{Event, Notice};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::commands::shared::export::write_export;
use crate::context::AppContext;
use crate::output::output_entries;
use crate::ui;

/// Handle `tone import`.
pub async fn handle(
    args: &ImportArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let contents = read_csv(Path::new(&args.file))?;
    let notice = ctx.apply(Event::ImportCsv(contents)).await;
    if let Notice::ImportAborted { reason } = &notice {
        bail!("cannot import {}: {reason}", args.file);
    }
    ui::notice(&notice);
    output_entries(ctx.state.ledger(), flags.format)?;

    if let Some(target) = args.export.as_deref() {
        let path = write_export(ctx.state.ledger(), Some(target), ctx.export_dir())?;
        if !flags.quiet {
            eprintln!(
                "Exported {} entries to {}",
                ctx.state.ledger().len(),
                path.display()
            );
        }
    }
    Ok(())
}

/// Read a CSV file for import.
pub fn read_csv(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::read_csv;

    #[test]
    fn missing_file_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = read_csv(&path).unwrap_err();
        assert!(err.to_string().contains("absent.csv"));
    }
}
