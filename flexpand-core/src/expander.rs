// flexpand-core/src/expander.rs
//! The Expander: turns an input specification into an ordered list of
//! existing paths.
//!
//! Five addressing modes are supported and the mode is always inferred from
//! the address itself, in this order:
//!
//! 1. an explicit list of addresses,
//! 2. an existing file carrying the list-file extension,
//! 3. any other existing file,
//! 4. an existing directory (immediate children only),
//! 5. anything else, which is expanded as a glob pattern.
//!
//! Every mode except the single file runs its result through
//! [`filter_paths`]. Individual addresses that do not exist, or that are not
//! regular files while `files_only` is active, are logged and skipped.
//!
//! License: MIT

use glob::{glob_with, MatchOptions};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::address::AddressSource;
use crate::errors::FlexpandError;
use crate::filter::{filter_paths, FilterRule};
use crate::list_file::{has_list_extension, read_addresses};

/// Extension (without the dot) that marks a list-file unless configured otherwise.
pub const DEFAULT_LIST_FILE_EXTENSION: &str = "txt";

/// An input specification with its addressing mode made explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpec {
    ExplicitList(Vec<String>),
    SinglePath(PathBuf),
    ListFile(PathBuf),
    Directory(PathBuf),
    GlobPattern(String),
}

/// Construction-time policy for an [`Expander`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpanderOptions {
    /// Extension (without the dot) that marks a list-file.
    pub list_file_extension: String,
    /// Reject existing entries that are not regular files.
    pub files_only: bool,
}

impl Default for ExpanderOptions {
    fn default() -> Self {
        Self {
            list_file_extension: DEFAULT_LIST_FILE_EXTENSION.to_string(),
            files_only: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Expander {
    options: ExpanderOptions,
}

impl Expander {
    pub fn new(options: ExpanderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExpanderOptions {
        &self.options
    }

    /// Decides which addressing mode `source` falls under.
    pub fn infer(&self, source: &AddressSource) -> InputSpec {
        match source {
            AddressSource::Many(items) => InputSpec::ExplicitList(items.clone()),
            AddressSource::One(address) => {
                let path = Path::new(address);
                if path.is_file() {
                    if has_list_extension(path, &self.options.list_file_extension) {
                        InputSpec::ListFile(path.to_path_buf())
                    } else {
                        InputSpec::SinglePath(path.to_path_buf())
                    }
                } else if path.exists() {
                    InputSpec::Directory(path.to_path_buf())
                } else {
                    InputSpec::GlobPattern(address.clone())
                }
            }
        }
    }

    /// Infers the mode of `source` and resolves it.
    pub fn resolve(
        &self,
        source: &AddressSource,
        filter: &FilterRule,
    ) -> Result<Vec<PathBuf>, FlexpandError> {
        let spec = self.infer(source);
        self.resolve_spec(&spec, filter)
    }

    /// Resolves an already-inferred specification.
    pub fn resolve_spec(
        &self,
        spec: &InputSpec,
        filter: &FilterRule,
    ) -> Result<Vec<PathBuf>, FlexpandError> {
        let resolved = match spec {
            InputSpec::ExplicitList(items) => {
                debug!("Processing explicit list of {} address(es).", items.len());
                let candidates = items.iter().map(PathBuf::from);
                filter_paths(self.validate_all(candidates), filter)?
            }
            InputSpec::ListFile(path) => {
                debug!("Processing list-file {}", path.display());
                let candidates = read_addresses(path)?.into_iter().map(PathBuf::from);
                filter_paths(self.validate_all(candidates), filter)?
            }
            InputSpec::SinglePath(path) => {
                // Single-file mode bypasses the regexp filter.
                debug!("Single file mode: {}", path.display());
                vec![path.clone()]
            }
            InputSpec::Directory(path) => {
                debug!("Processing directory {}", path.display());
                let candidates = list_directory(path);
                filter_paths(self.validate_all(candidates), filter)?
            }
            InputSpec::GlobPattern(pattern) => {
                debug!("Processing glob pattern '{}'", pattern);
                let candidates = expand_glob(pattern);
                filter_paths(self.validate_all(candidates), filter)?
            }
        };

        info!("Resolved {} input path(s).", resolved.len());
        Ok(resolved)
    }

    /// Single-file validity rule: the path must exist and, under the
    /// files-only policy, be a regular file.
    pub fn validate(&self, candidate: &Path) -> bool {
        if !candidate.exists() {
            debug!("path \"{}\" does not exist.", candidate.display());
            return false;
        }
        if self.options.files_only && !candidate.is_file() {
            debug!("path \"{}\" is not a file.", candidate.display());
            return false;
        }
        debug!("adding path \"{}\" to queue.", candidate.display());
        true
    }

    fn validate_all(&self, candidates: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
        candidates
            .into_iter()
            .filter(|candidate| self.validate(candidate))
            .collect()
    }
}

/// Immediate children of `dir` in enumeration order, hidden entries excluded.
/// An unreadable directory or entry is logged and contributes nothing.
fn list_directory(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to list directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut children = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read an entry of {}: {}", dir.display(), e);
                continue;
            }
        };
        if entry.file_name().to_string_lossy().starts_with('.') {
            debug!("skipping hidden entry {}", entry.path().display());
            continue;
        }
        children.push(entry.path());
    }
    children
}

/// Expands `pattern` against the filesystem. Problems are logged, not raised:
/// a pattern that cannot be parsed simply matches nothing.
fn expand_glob(pattern: &str) -> Vec<PathBuf> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let paths = match glob_with(pattern, options) {
        Ok(paths) => paths,
        Err(e) => {
            warn!("Invalid glob pattern '{}': {}", pattern, e);
            return Vec::new();
        }
    };

    paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Error resolving pattern '{}': {}", pattern, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn infers_each_mode() {
        let dir = tempdir().unwrap();
        let list = dir.path().join("inputs.txt");
        let single = dir.path().join("data.csv");
        fs::write(&list, "").unwrap();
        fs::write(&single, "").unwrap();

        let expander = Expander::default();
        let as_source = |p: &Path| AddressSource::from(p.to_string_lossy().to_string());

        assert_eq!(expander.infer(&as_source(&list)), InputSpec::ListFile(list.clone()));
        assert_eq!(expander.infer(&as_source(&single)), InputSpec::SinglePath(single.clone()));
        assert_eq!(
            expander.infer(&as_source(dir.path())),
            InputSpec::Directory(dir.path().to_path_buf())
        );
        assert_eq!(
            expander.infer(&AddressSource::from("nowhere/*.csv")),
            InputSpec::GlobPattern("nowhere/*.csv".to_string())
        );
        assert_eq!(
            expander.infer(&AddressSource::from(vec!["a", "b"])),
            InputSpec::ExplicitList(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn custom_list_extension_changes_inference() {
        let dir = tempdir().unwrap();
        let list = dir.path().join("inputs.lst");
        fs::write(&list, "").unwrap();

        let expander = Expander::new(ExpanderOptions {
            list_file_extension: "lst".to_string(),
            ..ExpanderOptions::default()
        });
        let source = AddressSource::from(list.to_string_lossy().to_string());
        assert_eq!(expander.infer(&source), InputSpec::ListFile(list));
    }

    #[test]
    fn validate_respects_files_only() {
        let dir = tempdir().unwrap();
        let strict = Expander::default();
        let lenient = Expander::new(ExpanderOptions {
            files_only: false,
            ..ExpanderOptions::default()
        });
        assert!(!strict.validate(dir.path()));
        assert!(lenient.validate(dir.path()));
        assert!(!lenient.validate(&dir.path().join("missing")));
    }

    #[test]
    fn unparsable_glob_matches_nothing() {
        assert!(expand_glob("[unclosed").is_empty());
    }
}
