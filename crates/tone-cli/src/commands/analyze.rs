use anyhow::bail;
use tone_session::{Event, Notice};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::context::AppContext;
use crate::output::output_entries;
use crate::progress::Progress;
use crate::ui;

/// Handle `tone analyze`.
pub async fn handle(
    args: &AnalyzeArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let notice = run(ctx, args.joined()).await;
    if notice == Notice::EmptyInput {
        bail!("nothing to analyze: the text is empty");
    }
    report(&notice, ctx, flags)
}

/// Analyze one text, with a spinner while a remote model is working.
pub async fn run(ctx: &mut AppContext, text: String) -> Notice {
    let spinner = ctx.state.strategy().is_remote().then(|| {
        Progress::spinner(&format!(
            "Analyzing with {}",
            ctx.state.strategy().describe(ctx.state.industry())
        ))
    });

    let notice = ctx.apply(Event::Analyze(text)).await;

    if let Some(spinner) = spinner {
        spinner.finish_clear();
    }
    notice
}

/// Print the fresh result, plus the notice when it is not a plain success.
pub fn report(notice: &Notice, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if *notice != Notice::Analyzed {
        ui::notice(notice);
    }
    if matches!(notice, Notice::Analyzed | Notice::FellBack { .. }) {
        output_entries(ctx.state.last_result(), flags.format)?;
    }
    Ok(())
}
