pub mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "feedship")]
#[command(about = "Resolve a YouTube channel URL to its RSS feed", long_about = None)]
pub struct Cli {
    /// YouTube channel URL; prompted for interactively when omitted
    pub url: Option<String>,
}
