use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scrawl")]
#[command(version, about = "A tiny self-hosted scratchpad for notes, links and files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to ./scrawl.json, then the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the items (overrides the config file)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web server (the default)
    Serve {
        /// Address to listen on, e.g. 0.0.0.0:8080
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// List notes, links and files
    #[command(alias = "ls")]
    List,

    /// Print the number of stored items
    Count,

    /// Print an item's raw contents
    #[command(alias = "v")]
    View {
        /// Item id, as shown by `list`
        id: String,
    },

    /// Delete an item
    #[command(alias = "rm")]
    Delete {
        /// Item id, as shown by `list`
        id: String,
    },
}
