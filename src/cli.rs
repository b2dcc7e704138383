use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "itemprint")]
#[command(
    version,
    about = "Fingerprint items, save the tokens and check items against a saved token file",
    long_about = None
)]
pub struct Cli {
    /// Settings as an inline JSON object or a path to a JSON file.
    #[arg(long, global = true)]
    pub settings: Option<String>,
    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the fingerprint of each item, one per line.
    Hash(ItemArgs),
    /// Fingerprint the items and write them to a token file.
    Save(SaveArgs),
    /// Report which items match a fingerprint in a token file.
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
pub struct ItemArgs {
    /// Items given directly. Without items or --items-file an interactive form is shown.
    #[arg(long = "item", value_name = "ITEM")]
    pub items: Vec<String>,
    /// File with one item per line.
    #[arg(long, value_name = "PATH")]
    pub items_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    #[command(flatten)]
    pub items: ItemArgs,
    /// Exact path of the token file to write.
    #[arg(long, value_name = "PATH", conflicts_with = "out_dir")]
    pub out: Option<PathBuf>,
    /// Directory for the generated items-<millis>.txt file.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub items: ItemArgs,
    /// Token file produced by `save`. Prompted for when omitted in interactive mode.
    #[arg(long, value_name = "PATH")]
    pub tokens: Option<PathBuf>,
    /// Output format for the match report.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReportFormat {
    Text,
    Json,
}
