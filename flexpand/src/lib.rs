// flexpand/src/lib.rs
//! # flexpand CLI Application
//!
//! This crate provides the command-line front end for `flexpand-core`: it
//! binds flags and an optional YAML document into typed options, runs the
//! Expander and Matcher, asks for confirmation on the terminal when a source
//! file would be overwritten, and prints the resulting plan.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

pub use commands::expand::run_expand;
pub use commands::plan::{run_plan, PlanOutput};
