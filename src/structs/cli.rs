use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "qualyzer")]
#[clap(about = "Scores code snippets with external linters over HTTP", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/qualyzer/config.toml when present)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
