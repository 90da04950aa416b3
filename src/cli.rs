use crate::catalog::TAG_ALL;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "neon", version, about = "NEON.AI desk CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Catalog source (catalog.json or a directory containing one); defaults to the built-in catalog"
    )]
    pub catalog: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Posts {
        query: Option<String>,
        #[arg(long, default_value = TAG_ALL)]
        tag: String,
    },
    Show {
        post: String,
    },
    Tags,
    Compare {
        #[command(subcommand)]
        command: CompareCommands,
    },
    Validate,
}

#[derive(Subcommand, Debug)]
pub enum CompareCommands {
    Subjects,
    Chart {
        #[arg(long, default_value_t = false)]
        all: bool,
        #[arg(long = "select", value_name = "SUBJECT")]
        select: Vec<String>,
    },
    Score {
        subjects: Vec<String>,
        #[arg(long = "weight", value_name = "METRIC=VALUE")]
        weight: Vec<String>,
    },
}
