// flexpand/src/cli.rs
//! This file defines the command-line interface (CLI) for the flexpand
//! application, including all available commands and their arguments.
//! License: MIT

use clap::{Args, Parser, Subcommand};
use flexpand_core::DEFAULT_LIST_FILE_EXTENSION;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "flexpand",
    version = env!("CARGO_PKG_VERSION"),
    about = "Expand files, directories, globs and list-files into file lists",
    long_about = "flexpand resolves an input address (a file, a directory, a glob pattern, a list-file with one address per line, or an explicit list from a YAML configuration) into a filtered list of existing files, and plans the output path for each of them without writing anything.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable all logging output
    #[arg(long, short = 'q', global = true, help = "Suppress all log messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'v', global = true, help = "Log every path decision.")]
    pub verbose: bool,

    /// Extension (without the dot) identifying list-files.
    #[arg(
        long = "list-file-extension",
        value_name = "EXT",
        default_value = DEFAULT_LIST_FILE_EXTENSION,
        global = true,
        help = "Extension identifying list-files."
    )]
    pub list_file_extension: String,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `flexpand` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolves the input address and prints the resulting files.
    #[command(about = "Resolve inputs and print the resulting file list.")]
    Expand(ExpandCommand),

    /// Resolves the inputs, derives their outputs and prints the accepted pairs.
    #[command(about = "Resolve inputs, derive output paths and print the accepted pairs.")]
    Plan(PlanCommand),
}

/// Options that select and filter input files.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Input address. Repeat the flag to pass an explicit list.
    #[arg(long, short = 'i', value_name = "ADDR", help = "File, directory, glob pattern or list-file. Repeat for an explicit list.")]
    pub files: Vec<String>,

    /// Regular expression to filter the resolved files with.
    #[arg(long, value_name = "REGEX", help = "Regular expression used to filter the resolved files.")]
    pub regexp: Option<String>,

    /// Mode of regular expression interpretation.
    #[arg(long = "regexp-mode", value_name = "MODE", help = "One of contains, matches, not_contains, not_matches. Default is contains.")]
    pub regexp_mode: Option<String>,

    /// Accept directories as well as regular files.
    #[arg(long = "include-dirs", help = "Keep existing directories in the result instead of only regular files.")]
    pub include_dirs: bool,

    /// YAML document supplying any option by its bare or prefixed name.
    #[arg(long, short = 'c', value_name = "FILE", help = "YAML file with values for any option (names without leading dashes).")]
    pub config: Option<PathBuf>,
}

/// Options that decide where outputs go and how they are named.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputArgs {
    /// Output location. Repeat the flag to pass an explicit list.
    #[arg(long, short = 'o', value_name = "ADDR", help = "Output directory or list-file. Repeat for an explicit list. Defaults to each input's own folder.")]
    pub folder: Vec<String>,

    #[arg(long, value_name = "PREFIX", help = "Prefix to add to output file names.")]
    pub prefix: Option<String>,

    #[arg(long, value_name = "EXT", help = "Extension (with its dot) to use for output files.")]
    pub extension: Option<String>,

    #[arg(
        long = "path-step",
        value_name = "N",
        allow_negative_numbers = true,
        help = "Use an ancestor folder name instead of the file name: -1 is the file itself, -2 its folder, and so on."
    )]
    pub path_step: Option<i32>,

    #[arg(long, value_name = "NAME", help = "Literal output file name (single input only).")]
    pub name: Option<String>,

    #[arg(long, short = 'f', help = "Overwrite existing outputs. Overwriting a source file asks for confirmation.")]
    pub force: bool,
}

/// Arguments for the `expand` command.
#[derive(Parser, Debug)]
pub struct ExpandCommand {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long, help = "Print the file list as a JSON array.")]
    pub json: bool,
}

/// Arguments for the `plan` command.
#[derive(Parser, Debug)]
pub struct PlanCommand {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[arg(long, help = "Print the plan as JSON.")]
    pub json: bool,
}
