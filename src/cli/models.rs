//! .

use crate::{
    launch::{DEFAULT_PROGRAM, DEFAULT_PROGRAM_ARGS},
    protocol::{
        DEFAULT_BASE_PORT, DEFAULT_DATA_COUNT, DEFAULT_JOIN, DEFAULT_NODE_COUNT,
        DEFAULT_STORE_URL, DEFAULT_WORD_URL,
    },
};

#[derive(clap::Parser, Debug)]
#[command(name = "populate", about = "Seed a CAN test cluster with nodes and data")]
pub struct Cli {
    /// Random word service, queried as `<url>?number=<n>`
    #[clap(global = true, long, default_value = DEFAULT_WORD_URL)]
    pub word_url: String,
    /// Per-request HTTP timeout in seconds; none when unset
    #[clap(global = true, long)]
    pub timeout: Option<u64>,
    #[clap(global = true, long)]
    pub json: bool,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// PUT random key/data pairs into a CAN store
    Data {
        #[clap(default_value_t = DEFAULT_DATA_COUNT)]
        count: usize,

        #[clap(long, default_value = DEFAULT_STORE_URL)]
        store_url: String,
    },
    /// Launch CAN nodes on consecutive ports
    Servers {
        #[clap(default_value_t = DEFAULT_NODE_COUNT)]
        count: usize,

        #[clap(default_value_t = DEFAULT_BASE_PORT)]
        port: u16,

        #[clap(long, default_value = DEFAULT_JOIN)]
        join: String,

        #[clap(flatten)]
        node: NodeProgram,

        /// Wait for all nodes to exit; Ctrl-C stops them
        #[clap(long)]
        wait: bool,
    },
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct NodeProgram {
    #[clap(long, default_value = DEFAULT_PROGRAM)]
    pub program: String,

    /// Arguments placed before the node flags (repeatable)
    #[clap(long = "program-arg", allow_hyphen_values = true, default_values = DEFAULT_PROGRAM_ARGS)]
    pub program_args: Vec<String>,

    /// Also send the key on the node's stdin
    #[clap(long)]
    pub key_stdin: bool,
}
