//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use vistas::{ElementKind, OrderKind};

/// Vistas - walk one list in six different orders
#[derive(Parser, Debug)]
#[command(name = "vistas", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a container and print its traversals
    Traverse(TraverseArgs),

    /// List the available orders
    Kinds,
}

/// Arguments for the `traverse` command.
#[derive(Args, Debug)]
pub struct TraverseArgs {
    /// Comma-separated elements, or "-" to read them from stdin
    pub elements: String,

    /// Element type
    #[arg(long = "type", short = 't', default_value = "int")]
    pub element_type: ElementType,

    /// Order to print (repeatable). Prints every order when omitted.
    #[arg(long, short = 'o', value_parser = parse_order)]
    pub order: Vec<OrderKind>,

    /// Remove every occurrence of this value before traversing (repeatable)
    #[arg(long, short = 'r')]
    pub remove: Vec<String>,
}

/// Element type of the container.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ElementType {
    /// 64-bit signed integers
    #[default]
    Int,
    /// Double-precision floats
    Float,
    /// UTF-8 strings
    Text,
}

impl From<ElementType> for ElementKind {
    fn from(value: ElementType) -> Self {
        match value {
            ElementType::Int => ElementKind::Int,
            ElementType::Float => ElementKind::Float,
            ElementType::Text => ElementKind::Text,
        }
    }
}

fn parse_order(s: &str) -> Result<OrderKind, String> {
    s.parse::<OrderKind>().map_err(|e| {
        let names: Vec<&str> = OrderKind::ALL.iter().map(|kind| kind.name()).collect();
        format!("{e} (expected one of: {})", names.join(", "))
    })
}
