use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "drillbox")]
#[command(about = "Typed helpers, async delay drills and a GitHub org client")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Repeat each value `factor` times
    Zoom {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
        #[arg(long, default_value_t = crate::core::annotations::DEFAULT_ZOOM_FACTOR)]
        factor: usize,
    },
    /// Pair each argument with its length
    ElementLength { items: Vec<String> },
    /// Gather `n` random delays and print them sorted
    WaitN {
        #[arg(long)]
        n: Option<usize>,
        #[arg(long)]
        max_delay: Option<f64>,
    },
    /// Same as wait-n, with each delay spawned as a task
    TaskWaitN {
        #[arg(long)]
        n: Option<usize>,
        #[arg(long)]
        max_delay: Option<f64>,
    },
    /// Average seconds per delay of one wait-n run
    MeasureTime {
        #[arg(long)]
        n: Option<usize>,
        #[arg(long)]
        max_delay: Option<f64>,
    },
    /// Collect the random float generator
    Comprehension,
    /// Time four comprehensions run in parallel
    MeasureRuntime,
    /// Look up a dotted key path inside a JSON document
    Nested {
        /// JSON document, or `-` to read stdin
        json: String,
        /// Key path such as `a.b.c`
        path: String,
    },
    /// Fetch an organization payload
    Org { name: String },
    /// List an organization's public repositories
    Repos {
        name: String,
        #[arg(long)]
        license: Option<String>,
    },
}
