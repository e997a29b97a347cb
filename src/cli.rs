// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dockmate")]
#[command(about = "Manage containers on a remote docker panel")]
#[command(version)]
pub struct Cli {
    /// Panel endpoint, e.g. http://10.0.0.5:8888/api (overrides config and env)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Print JSON lines instead of tables
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub json: bool,

    /// Print only IDs and final results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a dockmate.yml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// List containers
    Containers,

    /// List images
    Images,

    /// Show CPU and memory usage of containers
    Stats {
        /// Container IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Start a container
    Start { id: String },

    /// Stop a container
    Stop { id: String },

    /// Force-remove a container and its volumes
    Remove { id: String },

    /// Create and start an Anaconda (Jupyter + SSH) container
    CreateAnaconda {
        /// Host port for Jupyter
        #[arg(long)]
        jupyter_port: u16,

        /// Host port for SSH
        #[arg(long)]
        ssh_port: u16,
    },
}
