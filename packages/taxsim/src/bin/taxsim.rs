//! taxsim CLI
//!
//! # Usage
//!
//! ```bash
//! # Taxonomic similarity on 4 threads, with LCAs
//! taxsim -m tax -t 4 -l graph.tsv terms.tsv annotations.txt
//!
//! # Structural similarity, description labels, JSON output
//! taxsim -m str -d --format json graph.tsv terms.tsv annotations.txt
//!
//! # Settings from a YAML file, thread count overridden
//! taxsim --config run.yaml -t 8 graph.tsv terms.tsv annotations.txt
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides the `info` default); the report goes to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taxsim::config::{Metric, SimilarityConfig, Validatable};
use taxsim::features::loader::{normalize, LabelMode, OntologySource};
use taxsim::features::report::{JsonReporter, ReportFormat, TsvReporter};
use taxsim::features::similarity::SimilarityUseCase;

#[derive(Parser)]
#[command(name = "taxsim")]
#[command(about = "Pairwise taxonomic similarity of annotated ontology terms", long_about = None)]
struct Cli {
    /// Metric: tax (d_tax), str (d^str_tax) or ps (d_ps)
    #[arg(short, long)]
    metric: Option<Metric>,

    /// Number of worker threads
    #[arg(short = 't', long = "threads", value_parser = clap::value_parser!(u16).range(1..=128))]
    threads: Option<u16>,

    /// Label terms by description instead of name
    #[arg(short, long)]
    descriptions: bool,

    /// Report the lowest common ancestors of every pair
    #[arg(short, long)]
    lca: bool,

    /// Report format
    #[arg(long, default_value = "tsv")]
    format: ReportFormat,

    /// YAML run configuration (version: 1); flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Graph file: `n_nodes<TAB>n_arcs`, then `from<TAB>to<TAB>cost` lines
    graph: PathBuf,

    /// Terms file: `n`, then `name<TAB>description` lines
    terms: PathBuf,

    /// Annotations file: `n`, then one term name per line
    annotations: PathBuf,
}

impl Cli {
    fn similarity_config(&self) -> Result<SimilarityConfig> {
        let mut config = match &self.config {
            Some(path) => SimilarityConfig::from_yaml(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => SimilarityConfig::default(),
        };

        if let Some(metric) = self.metric {
            config = config.metric(metric);
        }
        if let Some(threads) = self.threads {
            config = config.workers(usize::from(threads));
        }
        if self.lca {
            config = config.with_lca(true);
        }

        config
            .validate()
            .with_context(|| format!("invalid {}", config.config_name()))?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.similarity_config()?;

    info!("Metric: {}", config.metric.notation());
    info!("Graph: {}", cli.graph.display());
    info!("Terms description: {}", cli.terms.display());
    info!("Annotations: {}", cli.annotations.display());
    info!("Number of threads: {}", config.workers);

    let start = Instant::now();

    let raw = OntologySource::new(&cli.graph, &cli.terms, &cli.annotations)
        .read()
        .context("failed to read input files")?;
    let mode = if cli.descriptions {
        LabelMode::Descriptions
    } else {
        LabelMode::Names
    };
    let ontology = normalize(raw, mode).context("invalid taxonomy")?;

    let table = SimilarityUseCase::new()
        .run(&ontology.graph, &ontology.annotated, &config)
        .context("similarity computation failed")?;

    if let Some((node, depth)) = table.deepest {
        info!(
            "The node deepest in the annotations is {} with depth {}",
            ontology.label(node).unwrap_or("?"),
            depth
        );
    }

    let mut out = BufWriter::new(io::stdout().lock());
    match cli.format {
        ReportFormat::Tsv => TsvReporter::write(&mut out, &table, &ontology.labels),
        ReportFormat::Json => JsonReporter::write(&mut out, &table, &ontology.labels),
    }
    .context("failed to write report")?;

    info!("Total time {:.3} secs", start.elapsed().as_secs_f64());
    Ok(())
}
