// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hypernym",
    version,
    about = "WordNet superclass grouping for ImageNet-style datasets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Dataset root containing the split directories
    #[arg(long, value_name = "DIR")]
    pub dataset: Option<PathBuf>,
    /// Directory holding words.txt, wordnet.is_a.txt and the class index
    #[arg(long, value_name = "DIR")]
    pub info: Option<PathBuf>,
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select superclasses by rank and group their leaf classes
    Partition {
        /// Number of superclasses to select
        n: usize,
        /// Only consider descendants of this node
        #[arg(long, value_name = "WNID")]
        ancestor: Option<String>,
        /// Never subdivide below these nodes (repeatable)
        #[arg(long, value_name = "WNID")]
        protect: Vec<String>,
        /// Keep every group at its natural size
        #[arg(long)]
        no_balance: bool,
        /// Emit the partition as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Group leaf classes under a curated, named superclass list
    Group {
        /// Registry name: living_9, mixed_10 or mixed_13
        name: String,
        /// Keep every group at its natural size
        #[arg(long)]
        no_balance: bool,
        /// Emit the partition as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show one node's name, class number and aggregates
    Info {
        /// WordNet id, e.g. n02084071
        wnid: String,
    },
}
