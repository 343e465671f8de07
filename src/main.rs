use anyhow::Context;
use clap::{Parser, Subcommand};
use peergrid_core::{
    CompositeWeights, Metric, RankingEngine, SelectionStrategy, DEFAULT_IN_GROUP_K,
    DEFAULT_OUT_GROUP_K, DEFAULT_TOP_K,
};
use peergrid_loader::{CsvCatalogLoader, RegionScheme};
use std::fs;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Peer similarity ranking over an airport traffic catalog
#[derive(Parser, Debug)]
#[command(name = "peergrid")]
#[command(about = "Rank an airport's nearest peers", long_about = None)]
struct Args {
    /// Path to the traffic catalog CSV
    #[arg(short, long)]
    catalog: PathBuf,

    /// Target airport code (e.g., LAX)
    #[arg(short, long)]
    target: String,

    /// Optional key,region CSV assigning region groups
    #[arg(long)]
    regions: Option<PathBuf>,

    /// Restrict the catalog to one country (substring match)
    #[arg(long)]
    country: Option<String>,

    /// Directory to write grid.json and grid.html into
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Output format printed to stdout
    #[arg(long, default_value = "text", value_parser = ["text", "json", "html"])]
    format: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Nearest K peers along one metric
    Nearest {
        /// Metric to rank on: passengers, growth, or share
        #[arg(long, default_value = "passengers")]
        metric: Metric,

        /// How many peers to return
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top: usize,
    },
    /// Weighted composite ranking across all metrics
    Composite {
        /// Weight for passenger throughput, 0-100
        #[arg(long, default_value_t = 85.0)]
        size_weight: f64,

        /// Weight for growth, 0-100 (the remainder goes to share)
        #[arg(long, default_value_t = 5.0)]
        growth_weight: f64,

        /// How many peers to return per list
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top: usize,
    },
    /// Peers inside and outside the target's region group
    Regional {
        /// Metric to rank on within each partition
        #[arg(long, default_value = "passengers")]
        metric: Metric,

        /// In-group peer count
        #[arg(long, default_value_t = DEFAULT_IN_GROUP_K)]
        in_group: usize,

        /// Out-of-group peer count
        #[arg(long, default_value_t = DEFAULT_OUT_GROUP_K)]
        out_group: usize,
    },
}

impl Command {
    fn strategy(&self) -> SelectionStrategy {
        match *self {
            Command::Nearest { metric, top } => SelectionStrategy::SingleMetric { metric, k: top },
            Command::Composite {
                size_weight,
                growth_weight,
                top,
            } => SelectionStrategy::Composite {
                weights: CompositeWeights::new(size_weight, growth_weight),
                k: top,
            },
            Command::Regional {
                metric,
                in_group,
                out_group,
            } => SelectionStrategy::RegionPartitioned {
                metric,
                in_group_k: in_group,
                out_group_k: out_group,
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting peergrid v{}", env!("CARGO_PKG_VERSION"));

    let mut loader = CsvCatalogLoader::new(&args.catalog);
    if let Some(path) = &args.regions {
        let scheme = RegionScheme::from_csv_path(path)
            .with_context(|| format!("loading region scheme from {}", path.display()))?;
        loader = loader.with_regions(scheme);
    }
    if let Some(country) = &args.country {
        loader = loader.with_country_filter(country.clone());
    }
    let catalog = loader
        .load()
        .with_context(|| format!("loading catalog from {}", args.catalog.display()))?;
    info!("Catalog loaded: {} airports", catalog.len());

    let target = args.target.to_ascii_uppercase();
    let strategy = args.command.strategy();
    let output = RankingEngine::new().rank(&catalog, &target, &strategy)?;
    info!("Ranked {} peers for {}", output.union.len() - 1, target);

    let rendered = match args.format.as_str() {
        "json" => peergrid_report::to_json(&output)?,
        "html" => peergrid_report::to_html(&output),
        _ => peergrid_report::to_text(&output),
    };
    println!("{rendered}");

    if let Some(out_dir) = &args.out {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("creating {}", out_dir.display()))?;
        fs::write(out_dir.join("grid.json"), peergrid_report::to_json(&output)?)?;
        fs::write(out_dir.join("grid.html"), peergrid_report::to_html(&output))?;
        info!("Wrote grid.json and grid.html to {}", out_dir.display());
    }

    Ok(())
}
