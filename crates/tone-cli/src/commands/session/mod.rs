mod repl;

use std::io::{IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, bail};
use tokio::io::{AsyncBufReadExt, BufReader};
use tone_core::Industry;
use tone_session::Event;

use crate::cli::GlobalFlags;
use crate::commands::analyze;
use crate::commands::import::read_csv;
use crate::commands::shared::export::write_export;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::views::{StatsView, StatusView};
use crate::output::{output, output_entries, output_stats};
use crate::ui;

use repl::{HELP, ReplCommand};

enum Flow {
    Continue,
    Quit,
}

/// Handle `tone session`: read lines from stdin until EOF or `:quit`.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal();
    if interactive && !flags.quiet {
        eprintln!(
            "tone session ({}, {}). Type :help for commands.",
            ctx.state.industry(),
            ctx.state.strategy().describe(ctx.state.industry())
        );
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            eprint!("tone> ");
            let _ = std::io::stderr().flush();
        }

        let Some(line) = lines
            .next_line()
            .await
            .context("failed to read from stdin")?
        else {
            break;
        };
        let Some(command) = repl::parse(&line) else {
            continue;
        };

        match execute(command, ctx, flags).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(error) => eprintln!("error: {error:#}"),
        }
    }

    tracing::debug!(entries = ctx.state.ledger().len(), "session ended");
    Ok(())
}

async fn execute(
    command: ReplCommand,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Flow> {
    match command {
        ReplCommand::Analyze(text) => {
            let notice = analyze::run(ctx, text).await;
            analyze::report(&notice, ctx, flags)?;
        }
        ReplCommand::Import(path) => {
            let contents = read_csv(Path::new(&path))?;
            let notice = ctx.apply(Event::ImportCsv(contents)).await;
            ui::notice(&notice);
        }
        ReplCommand::Export(path) => {
            let written = write_export(ctx.state.ledger(), path.as_deref(), ctx.export_dir())?;
            if !flags.quiet {
                eprintln!(
                    "Exported {} entries to {}",
                    ctx.state.ledger().len(),
                    written.display()
                );
            }
        }
        ReplCommand::Samples => {
            let notice = ctx.apply(Event::LoadSamples).await;
            ui::notice(&notice);
        }
        ReplCommand::Stats => {
            output_stats(&StatsView::from(&ctx.state.ledger().summary()), flags.format)?;
        }
        ReplCommand::History => output_entries(ctx.state.ledger(), flags.format)?,
        ReplCommand::Clear => {
            let notice = ctx.apply(Event::Clear).await;
            ui::notice(&notice);
        }
        ReplCommand::Industry(name) => {
            let industry: Industry = parse_enum(&name, "industry")?;
            ctx.set_industry(industry);
            if !flags.quiet {
                eprintln!("Industry set to {industry}");
            }
        }
        ReplCommand::Status => output(&status(ctx), flags.format)?,
        ReplCommand::Help => println!("{HELP}"),
        ReplCommand::Quit => return Ok(Flow::Quit),
        ReplCommand::Unknown(name) => bail!("unknown command ':{name}' (try :help)"),
        ReplCommand::Usage(usage) => bail!("usage: {usage}"),
    }
    Ok(Flow::Continue)
}

fn status(ctx: &AppContext) -> StatusView {
    let industry = ctx.state.industry();
    StatusView {
        industry,
        engine: ctx.state.strategy().describe(industry),
        entries: ctx.state.ledger().len(),
        export_dir: ctx.export_dir().to_string(),
    }
}
