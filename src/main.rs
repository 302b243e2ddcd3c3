use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use graphinfo::analysis::GraphAnalyzer;
use graphinfo::config::{
    AnalyzerConfig, BuilderConfig, DirectednessPolicy, EmptyMatrixPolicy, WeightPolicy,
    WeightedPredicate,
};
use graphinfo::export::{export, ExportData, ReportFormat};
use graphinfo::parser::load_graph;

#[derive(Parser)]
#[command(name = "graphinfo")]
#[command(version)]
#[command(about = "Structural property analyzer for graphs stored as incidence matrices", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a graph file and print its structural properties
    Analyze {
        /// Incidence matrix (or edge list) file
        path: PathBuf,

        /// Output format: text, json or markdown
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,

        /// How matrix values become edge weights
        #[arg(long, value_enum, default_value_t = WeightPolicy::Matrix)]
        weights: WeightPolicy,

        /// What to do with a matrix that declares zero rows
        #[arg(long, value_enum, default_value_t = EmptyMatrixPolicy::Reject)]
        empty_matrix: EmptyMatrixPolicy,

        /// Which weights make the graph count as weighted
        #[arg(long, value_enum, default_value_t = WeightedPredicate::NonUnit)]
        weighted_predicate: WeightedPredicate,

        /// Recompute directedness from edge symmetry or trust the loader
        #[arg(long, value_enum, default_value_t = DirectednessPolicy::Recompute)]
        directedness: DirectednessPolicy,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show version information
    Version,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GRAPHINFO_LOG")
        .unwrap_or_else(|_| EnvFilter::new("graphinfo=warn"));

    let format = env::var("GRAPHINFO_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze {
            path,
            format,
            weights,
            empty_matrix,
            weighted_predicate,
            directedness,
            output,
        }) => {
            let builder_config = BuilderConfig {
                weights,
                empty_matrix,
            };
            let analyzer_config = AnalyzerConfig {
                weighted_predicate,
                directedness,
            };

            let loaded = load_graph(&path, &builder_config)
                .with_context(|| format!("could not load a graph from {}", path.display()))?;
            info!(source = %loaded.source, path = %path.display(), "graph loaded");

            let report = GraphAnalyzer::with_config(&loaded.graph, analyzer_config).report();
            let data = ExportData::new(
                path.display().to_string(),
                loaded.source.to_string(),
                report,
            );

            match output {
                Some(out) => {
                    let file = File::create(&out)
                        .with_context(|| format!("could not create {}", out.display()))?;
                    let mut writer = BufWriter::new(file);
                    export(format, &data, &mut writer)?;
                    writer.flush()?;
                }
                None => {
                    let stdout = io::stdout();
                    let mut writer = stdout.lock();
                    export(format, &data, &mut writer)?;
                }
            }
        }
        Some(Commands::Version) => {
            println!("graphinfo v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            println!("graphinfo - Graph Structure Analyzer");
            println!("Run 'graphinfo analyze <FILE>' to analyze a graph");
            println!("Run 'graphinfo --help' for more information");
        }
    }

    Ok(())
}
