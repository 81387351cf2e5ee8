use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP analysis service
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
    },
    /// Write a sample configuration file
    Init,
    /// Check the configuration and that both tools can be found
    Validate,
    /// Analyze a local file and print the report as JSON
    Check {
        file: PathBuf,
    },
}
