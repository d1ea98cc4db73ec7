use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How resolved values are printed
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum OutputFormat {
    /// A JSON object in declaration order
    Json,
    /// One `name = value` line per setting
    Text,
}

#[derive(Parser, Debug)]
#[command(
    name = "clom",
    version,
    about = "Resolve command-line settings declared in a JSON file"
)]
pub struct CliArgs {
    /// JSON file declaring the settings (name, aliases, default, hint, kind)
    #[arg(short, long)]
    pub declarations: PathBuf,

    /// Output format for the resolved values
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Enable logging to stderr (filter with RUST_LOG, default: debug)
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Arguments to resolve against the declarations, after `--`
    #[arg(last = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
