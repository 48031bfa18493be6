//! filter.rs - Regular-expression filtering of resolved path lists.
//!
//! A `FilterRule` pairs an optional pattern with one of four selection modes.
//! Filtering is a stable sub-selection: survivors keep their relative order.
//!
//! License: MIT

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::errors::FlexpandError;

/// How a compiled pattern decides whether a path survives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum FilterMode {
    /// Keep paths where the pattern matches anywhere.
    #[default]
    Contains,
    /// Keep paths where a match starts at the first byte.
    Matches,
    NotContains,
    NotMatches,
    /// An unrecognized mode name. Filtering with it drops every path.
    Unknown(String),
}

impl From<&str> for FilterMode {
    fn from(value: &str) -> Self {
        match value {
            "contains" => FilterMode::Contains,
            "matches" => FilterMode::Matches,
            "not_contains" => FilterMode::NotContains,
            "not_matches" => FilterMode::NotMatches,
            other => FilterMode::Unknown(other.to_string()),
        }
    }
}

impl From<String> for FilterMode {
    fn from(value: String) -> Self {
        FilterMode::from(value.as_str())
    }
}

impl From<FilterMode> for String {
    fn from(mode: FilterMode) -> Self {
        mode.to_string()
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FilterMode::Contains => write!(f, "contains"),
            FilterMode::Matches => write!(f, "matches"),
            FilterMode::NotContains => write!(f, "not_contains"),
            FilterMode::NotMatches => write!(f, "not_matches"),
            FilterMode::Unknown(name) => write!(f, "{}", name),
        }
    }
}

/// A pattern plus the mode it is applied in. `pattern: None` disables filtering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterRule {
    pub pattern: Option<String>,
    pub mode: FilterMode,
}

impl FilterRule {
    pub fn new(pattern: impl Into<String>, mode: FilterMode) -> Self {
        Self {
            pattern: Some(pattern.into()),
            mode,
        }
    }

    /// A rule that keeps every path.
    pub fn none() -> Self {
        Self::default()
    }
}

fn keeps(regex: &Regex, mode: &FilterMode, candidate: &str) -> bool {
    match mode {
        FilterMode::Contains => regex.is_match(candidate),
        // Leftmost-first search: if any match can start at 0, `find` returns it.
        FilterMode::Matches => regex.find(candidate).is_some_and(|m| m.start() == 0),
        FilterMode::NotContains => !regex.is_match(candidate),
        FilterMode::NotMatches => !regex.find(candidate).is_some_and(|m| m.start() == 0),
        FilterMode::Unknown(_) => false,
    }
}

/// Applies `rule` to `paths`, returning the survivors in their original order.
///
/// Patterns are matched against the lossy UTF-8 rendering of each path. An
/// unknown mode is not an error: every path is dropped and logged.
pub fn filter_paths(paths: Vec<PathBuf>, rule: &FilterRule) -> Result<Vec<PathBuf>, FlexpandError> {
    let Some(pattern) = rule.pattern.as_deref() else {
        return Ok(paths);
    };

    let regex = Regex::new(pattern)
        .map_err(|e| FlexpandError::InvalidPattern(pattern.to_string(), e))?;

    if let FilterMode::Unknown(name) = &rule.mode {
        debug!("Unknown regexp mode '{}'; every path will be filtered out.", name);
    }

    let total = paths.len();
    let filtered: Vec<PathBuf> = paths
        .into_iter()
        .filter(|path| {
            let keep = keeps(&regex, &rule.mode, &path.to_string_lossy());
            if !keep {
                debug!(
                    "path {} removed while filtering with regular expression",
                    path.display()
                );
            }
            keep
        })
        .collect();

    debug!(
        "Regexp '{}' ({}) kept {} of {} path(s).",
        pattern,
        rule.mode,
        filtered.len(),
        total
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PathBuf> {
        ["data/a.csv", "data/b.json", "logs/a.log", "a.csv"]
            .iter()
            .map(PathBuf::from)
            .collect()
    }

    #[test]
    fn no_pattern_is_identity() {
        let rule = FilterRule {
            pattern: None,
            mode: FilterMode::Unknown("whatever".to_string()),
        };
        assert_eq!(filter_paths(sample(), &rule).unwrap(), sample());
    }

    #[test]
    fn contains_and_not_contains_partition() {
        let keep = filter_paths(sample(), &FilterRule::new(r"a\.", FilterMode::Contains)).unwrap();
        let drop = filter_paths(sample(), &FilterRule::new(r"a\.", FilterMode::NotContains)).unwrap();
        assert_eq!(keep, vec![PathBuf::from("data/a.csv"), PathBuf::from("logs/a.log"), PathBuf::from("a.csv")]);
        assert_eq!(drop, vec![PathBuf::from("data/b.json")]);
        assert_eq!(keep.len() + drop.len(), sample().len());
    }

    #[test]
    fn matches_is_anchored_at_start_only() {
        let keep = filter_paths(sample(), &FilterRule::new("data", FilterMode::Matches)).unwrap();
        assert_eq!(keep, vec![PathBuf::from("data/a.csv"), PathBuf::from("data/b.json")]);

        let rest = filter_paths(sample(), &FilterRule::new("data", FilterMode::NotMatches)).unwrap();
        assert_eq!(rest, vec![PathBuf::from("logs/a.log"), PathBuf::from("a.csv")]);
    }

    #[test]
    fn matches_prefers_a_match_at_zero_over_later_ones() {
        let paths = vec![PathBuf::from("ab-ab")];
        let keep = filter_paths(paths, &FilterRule::new("b|ab", FilterMode::Matches)).unwrap();
        assert_eq!(keep.len(), 1);
    }

    #[test]
    fn unknown_mode_drops_everything() {
        let rule = FilterRule::new(".*", FilterMode::from("includes"));
        assert!(filter_paths(sample(), &rule).unwrap().is_empty());
    }

    #[test]
    fn invalid_pattern_is_fatal() {
        let rule = FilterRule::new("(unclosed", FilterMode::Contains);
        let err = filter_paths(sample(), &rule).unwrap_err();
        assert!(matches!(err, FlexpandError::InvalidPattern(..)));
    }

    #[test]
    fn mode_names_round_through_strings() {
        assert_eq!(FilterMode::from("not_matches"), FilterMode::NotMatches);
        assert_eq!(FilterMode::NotContains.to_string(), "not_contains");
        assert_eq!(FilterMode::from("bogus"), FilterMode::Unknown("bogus".to_string()));
    }
}
