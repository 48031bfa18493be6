//! `flexpand plan`: resolve inputs, derive outputs, and print the pairs that
//! are safe to execute.

use anyhow::{Context, Result};
use flexpand_core::{
    ConfigBinding, ConfirmationGate, MatchCounts, MatchPlan, Matcher, MatcherConfig,
    MatcherOptions, PathPair, RawConfig,
};
use log::{debug, info};
use serde::Serialize;
use std::io::Write;

use super::{bind_input_args, bind_output_args, resolve_config, resolve_inputs};
use crate::cli::PlanCommand;
use crate::ui::plan_view;

/// Where the plan command sends its output.
pub struct PlanOutput<'a> {
    /// Accepted pairs.
    pub out: &'a mut dyn Write,
    /// Classification summary.
    pub summary: &'a mut dyn Write,
    pub supports_color: bool,
}

#[derive(Serialize)]
struct PlanReport<'a> {
    counts: &'a MatchCounts,
    recurrent_confirmed: bool,
    pairs: &'a [PathPair],
}

/// Runs the full pipeline and returns the plan after printing it.
pub fn run_plan(
    cmd: &PlanCommand,
    list_file_extension: &str,
    gate: &mut dyn ConfirmationGate,
    output: PlanOutput<'_>,
) -> Result<MatchPlan> {
    info!("Starting plan operation.");

    let mut cli_values = RawConfig::new();
    bind_input_args(&cmd.input, &mut cli_values);
    bind_output_args(&cmd.output, &mut cli_values);
    let raw = resolve_config(cli_values, &cmd.input)?;

    let inputs = resolve_inputs(&raw, &cmd.input, list_file_extension)?;

    let config = MatcherConfig::bind(&raw, Some(MatcherConfig::DEFAULT_PREFIX))?;
    debug!("Output address: {:?}, naming: {:?}", config.folder, config.naming);

    let matcher = Matcher::new(MatcherOptions {
        list_file_extension: list_file_extension.to_string(),
    });
    let spec = matcher.infer(config.folder.as_ref())?;
    let plan = matcher.plan(&inputs, &spec, &config.naming, config.force, gate)?;

    plan_view::print_summary(&plan.counts, plan.pairs.len(), output.summary, output.supports_color)?;

    if cmd.json {
        let report = PlanReport {
            counts: &plan.counts,
            recurrent_confirmed: plan.recurrent_confirmed,
            pairs: &plan.pairs,
        };
        serde_json::to_writer_pretty(&mut *output.out, &report).context("Failed to serialize plan")?;
        writeln!(output.out)?;
    } else {
        plan_view::print_pairs(&plan.pairs, output.out, output.supports_color)?;
    }

    info!("Plan operation completed.");
    Ok(plan)
}
