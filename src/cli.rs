// Command grammar: two levels, verb then resource. Flag spellings match
// the broker's documented CLI surface (`--sourceClusterId`, camelCase),
// so they are renamed explicitly instead of using clap's defaults.

use clap::{Parser, Subcommand};

/// Controls the kaptaind broker api
#[derive(Parser, Debug)]
#[command(name = "kap")]
#[command(version, about = "controls the kaptaind broker api", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get kaptaind resources
    #[command(subcommand)]
    Get(GetResource),

    /// Deletes kaptaind resources
    #[command(subcommand)]
    Delete(DeleteResource),

    /// Runs a new task
    #[command(subcommand)]
    Run(RunResource),
}

#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get Kubernetes clusters
    Clusters,

    /// Get cluster information
    Cluster {
        /// Id of the cluster to fetch
        id: String,
    },

    /// Get tasks
    Tasks,

    /// Get task information
    Task {
        /// Id of the task to fetch
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete a task
    Task {
        /// Id of the task to delete
        id: String,

        /// Inspect the broker's reply instead of fire-and-forget
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum RunResource {
    /// Start a new migration task
    Task {
        /// Id of the source kubernetes cluster to snapshot
        #[arg(long = "sourceClusterId", default_value = "")]
        source_cluster_id: String,

        /// Id of the target kubernetes cluster to restore
        #[arg(long = "targetClusterId", default_value = "")]
        target_cluster_id: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
