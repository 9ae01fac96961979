//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// parse-japanese - Parse Japanese text into NLCST
#[derive(Parser)]
#[command(name = "parse-japanese")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text file to parse (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Parser options file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Omit positions from the tree
    #[arg(long)]
    pub no_position: bool,

    /// Attach token metadata to every leaf
    #[arg(long)]
    pub pos: bool,

    /// Dictionary directory or embedded:// URI
    #[arg(short, long, value_name = "URI")]
    pub dictionary: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// NLCST as JSON
    Json,
    /// Indented outline
    Tree,
}
