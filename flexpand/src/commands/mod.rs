//! Command implementations and the option binding they share.
//!
//! Every command builds its options the same way: command-line values are
//! bound into a [`RawConfig`], the YAML document (if any) is merged over
//! them, and the core components bind their typed options from the result.

pub mod expand;
pub mod plan;

use anyhow::{bail, Result};
use flexpand_core::{
    ConfigBinding, Expander, ExpanderConfig, ExpanderOptions, MatcherConfig, RawConfig,
};
use log::debug;
use serde_yml::Value;
use std::path::PathBuf;

use crate::cli::{InputArgs, OutputArgs};

/// Repeated flags become a YAML sequence, a single flag a string.
fn address_value(values: &[String]) -> Option<Value> {
    match values {
        [] => None,
        [single] => Some(Value::String(single.clone())),
        many => Some(Value::Sequence(
            many.iter().cloned().map(Value::String).collect(),
        )),
    }
}

/// Key a flag value is stored under. Flags use the prefixed spelling so that
/// either spelling in the YAML document overrides them.
fn flag_key(prefix: &str, name: &str) -> String {
    format!("{}-{}", prefix, name)
}

/// Binds input flags under their `input-` names. Absent flags are left out so
/// the YAML document can still supply them.
pub fn bind_input_args(args: &InputArgs, raw: &mut RawConfig) {
    let key = |name: &str| flag_key(ExpanderConfig::DEFAULT_PREFIX, name);
    if let Some(files) = address_value(&args.files) {
        raw.insert(key("files"), files);
    }
    if let Some(regexp) = &args.regexp {
        raw.insert(key("regexp"), Value::String(regexp.clone()));
    }
    if let Some(mode) = &args.regexp_mode {
        raw.insert(key("regexp_mode"), Value::String(mode.clone()));
    }
}

/// Binds output flags under their `output-` names.
pub fn bind_output_args(args: &OutputArgs, raw: &mut RawConfig) {
    let key = |name: &str| flag_key(MatcherConfig::DEFAULT_PREFIX, name);
    if let Some(folder) = address_value(&args.folder) {
        raw.insert(key("folder"), folder);
    }
    if let Some(prefix) = &args.prefix {
        raw.insert(key("prefix"), Value::String(prefix.clone()));
    }
    if let Some(extension) = &args.extension {
        raw.insert(key("extension"), Value::String(extension.clone()));
    }
    if let Some(step) = args.path_step {
        raw.insert(key("path_step"), Value::Number(i64::from(step).into()));
    }
    if let Some(name) = &args.name {
        raw.insert(key("name"), Value::String(name.clone()));
    }
    if args.force {
        raw.insert(key("force"), Value::Bool(true));
    }
}

/// Merges the optional YAML document over the command-line values.
pub fn resolve_config(cli_values: RawConfig, input: &InputArgs) -> Result<RawConfig> {
    match &input.config {
        Some(path) => Ok(RawConfig::from_yaml_file(path)?.merge_over(cli_values)),
        None => Ok(cli_values),
    }
}

/// Binds the Expander options from `raw` and resolves the input files.
pub fn resolve_inputs(
    raw: &RawConfig,
    input: &InputArgs,
    list_file_extension: &str,
) -> Result<Vec<PathBuf>> {
    let config = ExpanderConfig::bind(raw, Some(ExpanderConfig::DEFAULT_PREFIX))?;
    let Some(files) = config.files else {
        bail!("No input files configured. Pass --files or provide `files` in the configuration file.");
    };
    debug!("Input address: {:?}, filter: {:?}", files, config.filter);

    let expander = Expander::new(ExpanderOptions {
        list_file_extension: list_file_extension.to_string(),
        files_only: !input.include_dirs,
    });
    Ok(expander.resolve(&files, &config.filter)?)
}
