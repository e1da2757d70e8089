//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "freecell",
    version,
    about = "Free Cell solitaire: deal layouts and play from the terminal"
)]
pub struct FreecellCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal a layout and print it
    Deal {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play a game, reading one command per line from stdin
    Play {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
