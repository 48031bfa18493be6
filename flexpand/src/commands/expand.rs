//! `flexpand expand`: resolve inputs and print them.

use anyhow::{Context, Result};
use flexpand_core::RawConfig;
use log::info;
use std::io::Write;

use super::{bind_input_args, resolve_config, resolve_inputs};
use crate::cli::ExpandCommand;
use crate::ui::plan_view;

pub fn run_expand<W: Write>(cmd: &ExpandCommand, list_file_extension: &str, out: &mut W) -> Result<()> {
    info!("Starting expand operation.");

    let mut cli_values = RawConfig::new();
    bind_input_args(&cmd.input, &mut cli_values);
    let raw = resolve_config(cli_values, &cmd.input)?;

    let paths = resolve_inputs(&raw, &cmd.input, list_file_extension)?;

    if cmd.json {
        serde_json::to_writer_pretty(&mut *out, &paths).context("Failed to serialize file list")?;
        writeln!(out)?;
    } else {
        plan_view::print_paths(&paths, out)?;
    }

    info!("Expand operation completed with {} file(s).", paths.len());
    Ok(())
}
