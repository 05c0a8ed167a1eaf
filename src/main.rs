// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Cityroute CLI - shortest routes between cities

use anyhow::Result;
use cityroute::commands::{self, export::ExportFormat, GraphSource, Output};
use cityroute::config::{self, Config};
use cityroute::generate::GeneratorConfig;
use cityroute::loader::ParseMode;
use cityroute::types::Weight;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cityroute")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "CITYROUTE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true)]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Edge list options shared by graph-loading commands
#[derive(Args)]
struct GraphArgs {
    /// CSV file with one `from,to,weight` edge per line
    csv: PathBuf,

    /// Treat edges as one-way
    #[arg(long, conflicts_with = "undirected")]
    directed: bool,

    /// Treat edges as two-way
    #[arg(long)]
    undirected: bool,

    /// Skip malformed records instead of failing
    #[arg(long, conflicts_with = "strict")]
    lenient: bool,

    /// Fail on the first malformed record
    #[arg(long)]
    strict: bool,
}

impl GraphArgs {
    fn into_source(self, config: &Config) -> GraphSource {
        let directed = match (self.directed, self.undirected) {
            (true, _) => true,
            (_, true) => false,
            _ => config.directed,
        };
        let mode = match (self.strict, self.lenient) {
            (true, _) => ParseMode::Strict,
            (_, true) => ParseMode::Lenient,
            _ => config.parse_mode(),
        };
        GraphSource {
            csv: self.csv,
            directed,
            mode,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest route between two cities
    Route {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start city
        from: String,

        /// Destination city
        to: String,

        /// Separator between cities in the printed route
        #[arg(long)]
        separator: Option<String>,
    },

    /// List the outgoing edges of a city
    Neighbors {
        #[command(flatten)]
        graph: GraphArgs,

        /// City to inspect
        city: String,
    },

    /// Export the graph to various formats
    Export {
        #[command(flatten)]
        graph: GraphArgs,

        /// Output format (dot, json)
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Time random queries on a generated graph
    Bench {
        /// Number of cities
        #[arg(long, default_value_t = 100_000)]
        cities: usize,

        /// Number of random edges to attempt
        #[arg(long, default_value_t = 1_000_000)]
        edges: usize,

        /// Number of queries to run
        #[arg(long, default_value_t = 10)]
        queries: usize,

        /// Largest edge weight
        #[arg(long, default_value_t = 1000)]
        max_weight: Weight,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Generate a directed graph
        #[arg(long)]
        directed: bool,
    },

    /// Inspect configuration
    Config {
        /// Action: show (alias: get), path
        #[arg(default_value = "show")]
        action: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `config` reads the file itself and `completions` never needs it
    let settings = match &cli.command {
        Commands::Config { .. } | Commands::Completions { .. } => Config::default(),
        _ => config::load(cli.config.as_deref())?,
    };

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => settings.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = Output {
        json: cli.json,
        color: !cli.no_color && std::io::stdout().is_terminal(),
    };

    // Execute command
    match cli.command {
        Commands::Route { graph, from, to, separator } => {
            let separator = separator.unwrap_or_else(|| settings.separator.clone());
            commands::route::run(&graph.into_source(&settings), &from, &to, &separator, output)
        }
        Commands::Neighbors { graph, city } => {
            commands::neighbors::run(&graph.into_source(&settings), &city, output)
        }
        Commands::Export { graph, format, output: path } => {
            let format: ExportFormat = format.parse()?;
            commands::export::run(&graph.into_source(&settings), format, path)
        }
        Commands::Bench { cities, edges, queries, max_weight, seed, directed } => {
            let generator = GeneratorConfig {
                cities,
                edges,
                max_weight,
                directed,
                seed,
            };
            commands::bench::run(generator, queries, output)
        }
        Commands::Config { action } => {
            commands::config::run(&action, cli.config.as_deref(), output)
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
