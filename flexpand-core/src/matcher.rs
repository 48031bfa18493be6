// flexpand-core/src/matcher.rs
//! The Matcher: derives an output path for every resolved input, classifies
//! each pair by collision risk, and assembles the plan a caller may execute.
//!
//! Classification uses filesystem identity, not string comparison, so an
//! output that reaches the input through a link or a roundabout relative path
//! is still recognized as a self-overwrite (`Recurrent`).
//!
//! The Matcher never writes anything and never prints. Counts are returned in
//! [`MatchCounts`], whose `Display` impl renders the human-readable summary.
//!
//! License: MIT

use log::{debug, info, warn};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::address::AddressSource;
use crate::errors::FlexpandError;
use crate::expander::DEFAULT_LIST_FILE_EXTENSION;
use crate::gate::ConfirmationGate;
use crate::identity::same_entity;
use crate::list_file::{has_list_extension, read_addresses};
use crate::naming::{derive_file_name, NamingRule};

/// Where outputs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSpec {
    /// Next to each input.
    SameDirectory,
    /// Every output in one existing directory.
    DirectoryPath(PathBuf),
    /// Outputs given positionally; length must equal the input count.
    ExplicitList(Vec<PathBuf>),
    /// Outputs read positionally from a list-file.
    ListFilePath(PathBuf),
}

/// Collision class of an (input, output) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Output does not exist yet.
    New,
    /// Output exists and is a different entity than the input.
    Overwrite,
    /// Output is the input itself. Writing it destroys the source.
    Recurrent,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Classification::New => write!(f, "new"),
            Classification::Overwrite => write!(f, "overwrite"),
            Classification::Recurrent => write!(f, "recurrent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathPair {
    pub input: PathBuf,
    pub output: PathBuf,
    pub classification: Classification,
}

/// Per-classification tallies over every derived pair, accepted or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchCounts {
    pub total: usize,
    pub new: usize,
    pub overwrite: usize,
    pub recurrent: usize,
}

impl MatchCounts {
    fn tally(pairs: &[PathPair]) -> Self {
        let mut counts = MatchCounts {
            total: pairs.len(),
            ..MatchCounts::default()
        };
        for pair in pairs {
            match pair.classification {
                Classification::New => counts.new += 1,
                Classification::Overwrite => counts.overwrite += 1,
                Classification::Recurrent => counts.recurrent += 1,
            }
        }
        counts
    }
}

impl fmt::Display for MatchCounts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "You tried to process {} file(s), and here are your stats.", self.total)?;
        writeln!(f, "- {} file(s) will be created", self.new)?;
        writeln!(f, "- {} existing file(s) would be overwritten", self.overwrite)?;
        write!(f, "- {} source file(s) would be overwritten by their own output", self.recurrent)
    }
}

/// Result of [`Matcher::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchPlan {
    /// Accepted pairs, in input order.
    pub pairs: Vec<PathPair>,
    pub counts: MatchCounts,
    /// Whether recurrent pairs were confirmed through the gate.
    pub recurrent_confirmed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Extension (without the dot) that marks an output list-file.
    pub list_file_extension: String,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            list_file_extension: DEFAULT_LIST_FILE_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Matcher {
    options: MatcherOptions,
}

impl Matcher {
    pub fn new(options: MatcherOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    /// Recognizes the shape of a raw output address.
    ///
    /// Absent means "same directory"; a list is positional; a string must name
    /// an existing directory or a list-file, anything else is rejected.
    pub fn infer(&self, source: Option<&AddressSource>) -> Result<OutputSpec, FlexpandError> {
        match source {
            None => Ok(OutputSpec::SameDirectory),
            Some(AddressSource::Many(items)) => Ok(OutputSpec::ExplicitList(
                items.iter().map(PathBuf::from).collect(),
            )),
            Some(AddressSource::One(address)) => {
                let path = Path::new(address);
                if path.is_dir() {
                    Ok(OutputSpec::DirectoryPath(path.to_path_buf()))
                } else if has_list_extension(path, &self.options.list_file_extension) {
                    Ok(OutputSpec::ListFilePath(path.to_path_buf()))
                } else {
                    Err(FlexpandError::UnrecognizedOutput(address.clone()))
                }
            }
        }
    }

    /// Computes one output path per input, in input order.
    pub fn derive_outputs(
        &self,
        inputs: &[PathBuf],
        output: &OutputSpec,
        naming: &NamingRule,
    ) -> Result<Vec<PathBuf>, FlexpandError> {
        let outputs = match output {
            OutputSpec::SameDirectory => inputs
                .iter()
                .map(|input| {
                    let dir = input.parent().unwrap_or_else(|| Path::new(""));
                    dir.join(derive_file_name(input, naming))
                })
                .collect(),
            OutputSpec::DirectoryPath(dir) => inputs
                .iter()
                .map(|input| dir.join(derive_file_name(input, naming)))
                .collect(),
            OutputSpec::ExplicitList(paths) => {
                check_lengths(inputs.len(), paths.len())?;
                paths.clone()
            }
            OutputSpec::ListFilePath(list_file) => {
                let paths: Vec<PathBuf> = read_addresses(list_file)?
                    .into_iter()
                    .filter(|address| !address.is_empty())
                    .map(PathBuf::from)
                    .collect();
                check_lengths(inputs.len(), paths.len())?;
                paths
            }
        };
        Ok(outputs)
    }

    /// Labels each (input, output) pair. Inputs and outputs are zipped
    /// positionally.
    pub fn classify(&self, inputs: &[PathBuf], outputs: &[PathBuf]) -> Vec<PathPair> {
        inputs
            .iter()
            .zip(outputs)
            .map(|(input, output)| {
                let classification = classify_pair(input, output);
                match classification {
                    Classification::New => {
                        debug!("New address: {} -> {}", input.display(), output.display())
                    }
                    Classification::Overwrite => {
                        debug!("Existing address: {} -> {}", input.display(), output.display())
                    }
                    Classification::Recurrent => {
                        debug!("Same address: {} -> {}", input.display(), output.display())
                    }
                }
                PathPair {
                    input: input.clone(),
                    output: output.clone(),
                    classification,
                }
            })
            .collect()
    }

    /// Derives, classifies, and filters pairs down to the ones safe to execute.
    ///
    /// New pairs are always accepted. Overwrite pairs need `force`. Recurrent
    /// pairs need `force` and an affirmative answer from `gate`, which is
    /// consulted once, and only when at least one recurrent pair exists.
    pub fn plan(
        &self,
        inputs: &[PathBuf],
        output: &OutputSpec,
        naming: &NamingRule,
        force: bool,
        gate: &mut dyn ConfirmationGate,
    ) -> Result<MatchPlan, FlexpandError> {
        let outputs = self.derive_outputs(inputs, output, naming)?;
        let classified = self.classify(inputs, &outputs);
        let counts = MatchCounts::tally(&classified);

        let recurrent_confirmed = if force && counts.recurrent > 0 {
            let prompt = format!(
                "You are going to overwrite {} source file(s).",
                counts.recurrent
            );
            gate.confirm(&prompt)?
        } else {
            false
        };

        let pairs: Vec<PathPair> = classified
            .into_iter()
            .filter(|pair| match pair.classification {
                Classification::New => true,
                Classification::Overwrite => force,
                Classification::Recurrent => recurrent_confirmed,
            })
            .collect();

        info!(
            "Planned {} of {} pair(s) (new: {}, overwrite: {}, recurrent: {}).",
            pairs.len(),
            counts.total,
            counts.new,
            counts.overwrite,
            counts.recurrent
        );

        Ok(MatchPlan {
            pairs,
            counts,
            recurrent_confirmed,
        })
    }
}

fn check_lengths(inputs: usize, outputs: usize) -> Result<(), FlexpandError> {
    if inputs != outputs {
        return Err(FlexpandError::LengthMismatch { inputs, outputs });
    }
    Ok(())
}

fn classify_pair(input: &Path, output: &Path) -> Classification {
    if !output.exists() {
        return Classification::New;
    }
    match same_entity(input, output) {
        Ok(true) => Classification::Recurrent,
        Ok(false) => Classification::Overwrite,
        Err(e) => {
            // The input vanished or became unreadable since resolution.
            warn!(
                "Could not compare {} with {}: {}; treating as overwrite.",
                input.display(),
                output.display(),
                e
            );
            Classification::Overwrite
        }
    }
}
