use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use typeahead::engine::{DEFAULT_SUGGESTION_LIMIT, SuggestEngine};
use typeahead::store::FileStore;
use typeahead::{output, utils};

#[derive(Parser)]
#[command(name = "typeahead")]
#[command(about = "Popularity-ranked typeahead suggestions with durable query counts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the frequency store file (defaults to the app data dir)
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest completions for a prefix
    Suggest {
        /// Prefix to complete
        prefix: String,

        /// Maximum number of suggestions
        #[arg(short, long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
        limit: usize,
    },
    /// Record one occurrence of each given query
    Record {
        /// Queries to record (each argument is one full query)
        #[arg(required = true)]
        queries: Vec<String>,
    },
    /// Show the most popular queries
    Popular {
        /// Maximum number of entries
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Show engine statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store_path = match cli.store {
        Some(path) => path,
        None => utils::default_store_path()?,
    };
    let store = FileStore::open(&store_path)?;
    let engine = SuggestEngine::open(Arc::new(store));
    let color = !cli.no_color;

    match cli.command {
        Commands::Suggest { prefix, limit } => {
            let suggestions = engine.suggest(&prefix, limit);
            output::print_suggestions(&prefix, &suggestions, color)?;
        }
        Commands::Record { queries } => {
            for query in &queries {
                engine.record(query);
            }
            let applied = engine.stats().records_applied;
            println!("Recorded {} quer{}", applied, if applied == 1 { "y" } else { "ies" });
        }
        Commands::Popular { limit } => {
            let popular = engine.popular(limit);
            output::print_popular(&popular, color)?;
        }
        Commands::Stats => {
            output::print_stats(&engine.stats(), color)?;
        }
    }

    Ok(())
}
