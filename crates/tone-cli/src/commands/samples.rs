use std::path::Path;

use tone_session::Event;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SamplesArgs;
use crate::commands::shared::export::write_text;
use crate::context::AppContext;
use crate::output::output_entries;
use crate::ui;

/// Handle `tone samples`.
pub async fn handle(
    args: &SamplesArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.csv {
        return write_sample_csv(args.out.as_deref(), ctx, flags);
    }

    let notice = ctx.apply(Event::LoadSamples).await;
    ui::notice(&notice);
    output_entries(ctx.state.ledger(), flags.format)
}

fn write_sample_csv(
    out: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let industry = ctx.state.industry();
    let csv = tone_csv::sample_csv(industry);

    let Some(out) = out else {
        println!("{csv}");
        return Ok(());
    };

    let path = if Path::new(out).is_dir() {
        Path::new(out).join(tone_csv::sample_file_name(industry))
    } else {
        Path::new(out).to_path_buf()
    };
    write_text(&path, &csv)?;
    if !flags.quiet {
        eprintln!("Wrote {industry} sample data to {}", path.display());
    }
    Ok(())
}
