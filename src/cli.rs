use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "lander-showcase",
    version,
    about = "Browse recorded Lunar Lander RL episodes and training stats"
)]
pub struct Cli {
    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding `videos/` and the training chart
    #[arg(long, global = true)]
    pub assets: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive showcase (default)
    Tui {
        /// Section to open: videos, about or performance
        #[arg(long, default_value = "videos")]
        section: String,
    },
    /// List every episode with its asset path
    Episodes {
        #[arg(long)]
        json: bool,
    },
    /// Print the training performance summary
    Stats {
        #[arg(long)]
        json: bool,
    },
}
