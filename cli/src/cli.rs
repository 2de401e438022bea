//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::demo::CATALOG;

/// seqkit - Array operations over literal arrays
#[derive(Parser, Debug)]
#[command(name = "seqkit", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply one operation to an array literal
    Eval(EvalArgs),

    /// Replay the example scenarios
    Demo(DemoArgs),

    /// List operations and built-in callbacks
    List,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Operation to apply, e.g. `map` or `Array.findIndex`
    pub operation: String,

    /// Array literal, e.g. `[1, 2, NaN, "a", null]`
    pub array: String,

    /// Further arguments: literals or `@name` callbacks
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `demo` command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Scenario to replay; all of them when omitted
    #[arg(value_parser = scenario_names())]
    pub name: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

fn scenario_names() -> PossibleValuesParser {
    PossibleValuesParser::new(CATALOG.iter().map(|scenario| scenario.name))
}
