mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use typeahead::{load_dictionary, repl, ServerConfig, SuggestServer};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve {
            dict,
            bind,
            web,
            limit,
        } => {
            let index = load_dictionary(&dict)
                .with_context(|| format!("loading dictionary {}", dict.display()))?;
            let server = SuggestServer::new(
                ServerConfig {
                    bind,
                    web_root: web,
                    max_results: limit,
                },
                index,
            );
            server.run().await
        }

        Commands::Query {
            dict,
            pattern,
            limit,
            json,
        } => {
            let index = load_dictionary(&dict)
                .with_context(|| format!("loading dictionary {}", dict.display()))?;
            let suggestions = index.query(&pattern, limit);
            if json {
                println!("{}", serde_json::to_string(&suggestions)?);
            } else {
                for suggestion in &suggestions {
                    println!("{}", suggestion.term);
                }
            }
            Ok(())
        }

        Commands::Repl { dict, limit } => {
            let index = load_dictionary(&dict)
                .with_context(|| format!("loading dictionary {}", dict.display()))?;
            info!(terms = index.len(), "dictionary ready");
            repl::run(&index, limit)?;
            Ok(())
        }
    }
}
