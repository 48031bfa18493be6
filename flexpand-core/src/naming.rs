//! naming.rs - Output file name derivation.
//!
//! Rules are applied in a fixed order: a literal name wins outright; otherwise
//! the stem may be replaced by an ancestor directory name (`depth`), then
//! prefixed, and finally joined with either a replacement extension or the
//! original one.
//!
//! License: MIT

use serde::{Deserialize, Serialize};
use std::path::Path;

/// `depth` value meaning "use the file itself".
pub const SELF_DEPTH: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingRule {
    /// -1 keeps the file stem, -2 uses the parent directory name, -3 the
    /// grandparent, and so on.
    pub depth: i32,
    pub prefix: Option<String>,
    /// Replacement extension, including its dot (e.g. `".json"`).
    pub extension: Option<String>,
    /// Verbatim output name. Only sensible for a single input.
    pub literal_name: Option<String>,
}

impl Default for NamingRule {
    fn default() -> Self {
        Self {
            depth: SELF_DEPTH,
            prefix: None,
            extension: None,
            literal_name: None,
        }
    }
}

/// Splits a basename into stem and extension at the last dot. The extension
/// keeps its dot; leading dots (`.bashrc`, `..cache`) never start an extension.
fn split_extension(path: &Path) -> (String, String) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let leading = name.len() - name.trim_start_matches('.').len();
    let dot = name[leading..].rfind('.');
    match dot {
        Some(idx) => {
            let (stem, ext) = name.split_at(leading + idx);
            (stem.to_string(), ext.to_string())
        }
        None => (name, String::new()),
    }
}

/// Name of the directory `levels` steps above `path`, or an empty string when
/// the path runs out of components first.
fn ancestor_name(path: &Path, levels: usize) -> String {
    let mut current = Some(path);
    for _ in 0..levels {
        current = current.and_then(Path::parent);
    }
    current
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Derives the output file name for `input` under `rule`.
pub fn derive_file_name(input: &Path, rule: &NamingRule) -> String {
    if let Some(name) = &rule.literal_name {
        return name.clone();
    }

    let (mut stem, ext) = split_extension(input);

    if rule.depth != SELF_DEPTH {
        let levels = (-i64::from(rule.depth) - 1).max(0) as usize;
        stem = ancestor_name(input, levels);
    }

    if let Some(prefix) = &rule.prefix {
        stem = format!("{}_{}", prefix, stem);
    }

    match &rule.extension {
        Some(extension) => format!("{}{}", stem, extension),
        None => format!("{}{}", stem, ext),
    }
}
