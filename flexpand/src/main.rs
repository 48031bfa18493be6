// flexpand/src/main.rs
//! flexpand entry point.

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use log::LevelFilter;
use std::io;

use flexpand::cli::{Cli, Commands};
use flexpand::commands::{expand::run_expand, plan::{run_plan, PlanOutput}};
use flexpand::logger;
use flexpand::utils::prompt::TerminalPrompt;

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.verbose {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match &args.command {
        Commands::Expand(cmd) => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            run_expand(cmd, &args.list_file_extension, &mut writer)?;
        }
        Commands::Plan(cmd) => {
            let stdout = io::stdout();
            let supports_color = stdout.is_terminal() && io::stderr().is_terminal();
            let mut out = stdout.lock();
            let mut summary = io::stderr();
            let mut gate = TerminalPrompt::stdio();
            run_plan(
                cmd,
                &args.list_file_extension,
                &mut gate,
                PlanOutput {
                    out: &mut out,
                    summary: &mut summary,
                    supports_color,
                },
            )?;
        }
    }

    Ok(())
}
