// flexpand-core/src/lib.rs
//! # Flexpand Core Library
//!
//! `flexpand-core` resolves loosely specified inputs into concrete file lists
//! and plans where the outputs for those files should go. It reads paths,
//! directory listings and list-files, but never file contents, and it never
//! writes: callers receive a plan of `(input, output)` pairs and decide what
//! to do with them.
//!
//! ## Modules
//!
//! * `expander`: infers the addressing mode of an input (explicit list,
//!   list-file, single file, directory, glob) and resolves it to existing paths.
//! * `filter`: regular-expression filtering in four modes.
//! * `list_file`: comment rules for newline-delimited list-files.
//! * `naming`: output file name derivation (prefix, extension, ancestor depth).
//! * `matcher`: output path derivation, collision classification and plan assembly.
//! * `identity`: filesystem identity checks used to detect self-overwrites.
//! * `gate`: the confirmation capability consulted before a source is overwritten.
//! * `config`: option descriptors, YAML loading and typed option binding.
//! * `errors`: the fatal error type.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use flexpand_core::{AddressSource, Expander, FilterMode, FilterRule, Matcher, NamingRule};
//!
//! fn main() -> anyhow::Result<()> {
//!     let inputs = Expander::default().resolve(
//!         &AddressSource::from("data/*.csv"),
//!         &FilterRule::new("raw", FilterMode::NotContains),
//!     )?;
//!
//!     let matcher = Matcher::default();
//!     let output = matcher.infer(Some(&AddressSource::from("out")))?;
//!     let naming = NamingRule { extension: Some(".parquet".to_string()), ..NamingRule::default() };
//!
//!     let plan = matcher.plan(&inputs, &output, &naming, false, &mut |_: &str| false)?;
//!     println!("{}", plan.counts);
//!     for pair in &plan.pairs {
//!         println!("{} -> {}", pair.input.display(), pair.output.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Only fatal configuration problems surface as [`FlexpandError`]. Paths that
//! do not exist, have the wrong kind, or are filtered out are logged through
//! the `log` facade and skipped.
//!
//! ---
//! License: MIT

pub mod address;
pub mod config;
pub mod errors;
pub mod expander;
pub mod filter;
pub mod gate;
pub mod identity;
pub mod list_file;
pub mod matcher;
pub mod naming;

/// Re-exports the raw address type shared by inputs and outputs.
pub use address::AddressSource;

/// Re-exports the configuration binding surface.
pub use config::{
    ConfigBinding,
    ExpanderConfig,
    MatcherConfig,
    OptionDescriptor,
    RawConfig,
    INPUT_PREFIX,
    OUTPUT_PREFIX,
};

/// Re-exports the custom error type.
pub use errors::FlexpandError;

pub use expander::{Expander, ExpanderOptions, InputSpec, DEFAULT_LIST_FILE_EXTENSION};
pub use filter::{filter_paths, FilterMode, FilterRule};
pub use gate::{AlwaysDecline, ConfirmationGate};
pub use identity::same_entity;
pub use matcher::{
    Classification,
    MatchCounts,
    MatchPlan,
    Matcher,
    MatcherOptions,
    OutputSpec,
    PathPair,
};
pub use naming::{derive_file_name, NamingRule};
