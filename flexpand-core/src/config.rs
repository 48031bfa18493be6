//! Configuration binding for `flexpand-core`.
//!
//! Options reach the core from two places: command-line flags bound by the
//! front end, and an optional YAML document. Both are collected into a
//! [`RawConfig`] (a flat, string-keyed map of YAML values); the YAML document
//! is merged over the CLI values, and each component then binds its own typed
//! options through [`ConfigBinding`].
//!
//! A key may be written bare (`regexp`) or with the component's prefix
//! (`input-regexp`). When both are present, the bare key wins.
//!
//! License: MIT

use anyhow::{Context, Result};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yml::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::address::AddressSource;
use crate::errors::FlexpandError;
use crate::filter::{FilterMode, FilterRule};
use crate::naming::{NamingRule, SELF_DEPTH};

/// Prefix used for Expander options in prefixed form (`input-files`).
pub const INPUT_PREFIX: &str = "input";
/// Prefix used for Matcher options in prefixed form (`output-folder`).
pub const OUTPUT_PREFIX: &str = "output";

/// A flat map of option names to untyped YAML values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RawConfig {
    entries: BTreeMap<String, Value>,
}

impl RawConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML mapping. An empty document yields an empty config.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }
        let config: RawConfig =
            serde_yml::from_str(text).context("Failed to parse YAML configuration")?;
        Ok(config)
    }

    /// Loads a YAML mapping from a file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded {} key(s) from {}.", config.len(), path.display());
        Ok(config)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlays `self` onto `base`: every key present here replaces the
    /// corresponding key in `base`.
    pub fn merge_over(self, mut base: RawConfig) -> RawConfig {
        for (key, value) in self.entries {
            debug!("Configuration key '{}' overrides the command line.", key);
            base.entries.insert(key, value);
        }
        base
    }

    /// Looks up `name`, falling back to `prefix-name`. `Null` counts as absent.
    pub fn lookup(&self, name: &str, prefix: Option<&str>) -> Option<(String, &Value)> {
        let present = |key: &str| self.entries.get(key).filter(|v| !v.is_null());

        if let Some(value) = present(name) {
            return Some((name.to_string(), value));
        }
        let prefixed = prefixed_name(name, prefix)?;
        present(&prefixed).map(|value| (prefixed, value))
    }

    /// Looks up and deserializes `name` into `T`.
    pub fn typed<T: DeserializeOwned>(
        &self,
        name: &str,
        prefix: Option<&str>,
    ) -> Result<Option<T>, FlexpandError> {
        match self.lookup(name, prefix) {
            None => Ok(None),
            Some((key, value)) => serde_yml::from_value(value.clone())
                .map(Some)
                .map_err(|e| FlexpandError::Config {
                    key,
                    message: e.to_string(),
                }),
        }
    }
}

/// `name` as it appears with `prefix`, e.g. `input-files`.
pub fn prefixed_name(name: &str, prefix: Option<&str>) -> Option<String> {
    prefix
        .filter(|p| !p.is_empty())
        .map(|p| format!("{}-{}", p, name))
}

/// Describes one logical option a component accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub name: &'static str,
    pub help: &'static str,
    /// Rendered default, if the option has one.
    pub default: Option<&'static str>,
}

/// The capability every configurable component implements: list the options
/// it understands and bind them from a raw configuration.
pub trait ConfigBinding: Sized {
    /// Prefix used when the caller does not supply one.
    const DEFAULT_PREFIX: &'static str;

    fn describe_options() -> Vec<OptionDescriptor>;

    fn bind(raw: &RawConfig, prefix: Option<&str>) -> Result<Self, FlexpandError>;
}

/// Typed options for the Expander.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpanderConfig {
    pub files: Option<AddressSource>,
    pub filter: FilterRule,
}

impl ConfigBinding for ExpanderConfig {
    const DEFAULT_PREFIX: &'static str = INPUT_PREFIX;

    fn describe_options() -> Vec<OptionDescriptor> {
        vec![
            OptionDescriptor {
                name: "files",
                help: "Files to work with: a list, a directory, a wildcarded path, or a list-file with one address per line.",
                default: None,
            },
            OptionDescriptor {
                name: "regexp",
                help: "Regular expression used to filter the resolved files.",
                default: None,
            },
            OptionDescriptor {
                name: "regexp_mode",
                help: "How the regexp is applied: contains, matches, not_contains or not_matches.",
                default: Some("contains"),
            },
        ]
    }

    fn bind(raw: &RawConfig, prefix: Option<&str>) -> Result<Self, FlexpandError> {
        let files = raw.typed::<AddressSource>("files", prefix)?;
        let pattern = raw.typed::<String>("regexp", prefix)?;
        let mode = raw
            .typed::<String>("regexp_mode", prefix)?
            .map(FilterMode::from)
            .unwrap_or_default();

        Ok(Self {
            files,
            filter: FilterRule { pattern, mode },
        })
    }
}

/// Typed options for the Matcher.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatcherConfig {
    pub folder: Option<AddressSource>,
    pub naming: NamingRule,
    pub force: bool,
}

impl ConfigBinding for MatcherConfig {
    const DEFAULT_PREFIX: &'static str = OUTPUT_PREFIX;

    fn describe_options() -> Vec<OptionDescriptor> {
        vec![
            OptionDescriptor {
                name: "folder",
                help: "Output location: a list, a directory, or a list-file. Absent means next to each input.",
                default: None,
            },
            OptionDescriptor {
                name: "prefix",
                help: "Prefix added to every output file name.",
                default: None,
            },
            OptionDescriptor {
                name: "extension",
                help: "Extension used for output files, including the dot.",
                default: None,
            },
            OptionDescriptor {
                name: "path_step",
                help: "Use an ancestor directory name instead of the file name: -1 is the file itself, -2 its folder, and so on.",
                default: Some("-1"),
            },
            OptionDescriptor {
                name: "force",
                help: "Overwrite existing outputs. Overwriting a source file additionally asks for confirmation.",
                default: Some("false"),
            },
            OptionDescriptor {
                name: "name",
                help: "Literal output file name. Only sensible for a single input.",
                default: None,
            },
        ]
    }

    fn bind(raw: &RawConfig, prefix: Option<&str>) -> Result<Self, FlexpandError> {
        Ok(Self {
            folder: raw.typed::<AddressSource>("folder", prefix)?,
            naming: NamingRule {
                depth: raw.typed::<i32>("path_step", prefix)?.unwrap_or(SELF_DEPTH),
                prefix: raw.typed::<String>("prefix", prefix)?,
                extension: raw.typed::<String>("extension", prefix)?,
                literal_name: raw.typed::<String>("name", prefix)?,
            },
            force: raw.typed::<bool>("force", prefix)?.unwrap_or(false),
        })
    }
}
