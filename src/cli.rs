use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "typeahead",
    about = "Weighted prefix + substring autocomplete over a dictionary file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve suggestions over HTTP
    Serve {
        /// Dictionary file (one `term[,frequency]` per line)
        #[arg(short, long)]
        dict: PathBuf,

        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:8080")]
        bind: String,

        /// Directory of static files served alongside /suggestions
        #[arg(long)]
        web: Option<PathBuf>,

        /// Result cap when a request has no limit parameter
        #[arg(long, default_value_t = typeahead::DEFAULT_MAX_RESULTS)]
        limit: usize,
    },

    /// Print suggestions for one pattern and exit
    Query {
        /// Dictionary file (one `term[,frequency]` per line)
        #[arg(short, long)]
        dict: PathBuf,

        /// Pattern to complete
        pattern: String,

        /// Maximum number of suggestions
        #[arg(long, default_value_t = typeahead::DEFAULT_MAX_RESULTS)]
        limit: usize,

        /// Emit JSON with weights instead of plain terms
        #[arg(long)]
        json: bool,
    },

    /// Interactive typing loop against a loaded dictionary
    Repl {
        /// Dictionary file (one `term[,frequency]` per line)
        #[arg(short, long)]
        dict: PathBuf,

        /// Maximum number of suggestions shown per step
        #[arg(long, default_value_t = typeahead::DEFAULT_MAX_RESULTS)]
        limit: usize,
    },
}
