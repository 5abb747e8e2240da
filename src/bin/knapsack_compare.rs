use clap::Parser;
use tracing_subscriber::EnvFilter;
use u_knapsack::compare::{CompareConfig, CompareRunner};
use u_knapsack::items::{default_capacity, generate, ItemGenConfig};
use u_knapsack::Algorithm;

/// Generate a random knapsack instance and compare the exact engines on it
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Params {
    /// number of items to generate
    #[arg(short = 'n', long, default_value_t = 40)]
    items: usize,
    /// smallest item value
    #[arg(long, default_value_t = 1)]
    min_value: i64,
    /// largest item value
    #[arg(long, default_value_t = 10)]
    max_value: i64,
    /// smallest item weight
    #[arg(long, default_value_t = 4)]
    min_weight: i64,
    /// largest item weight
    #[arg(long, default_value_t = 10)]
    max_weight: i64,
    /// seed of the item generator
    #[arg(short, long, default_value_t = 1337)]
    seed: u64,
    /// weight budget (defaults to half the total weight)
    #[arg(short, long)]
    capacity: Option<i64>,
    /// engine to run; repeat to select several (defaults to all)
    #[arg(short, long = "algorithm")]
    algorithms: Vec<Algorithm>,
    /// run the engines concurrently
    #[arg(short, long)]
    parallel: bool,
    /// ignore the per-engine item limits
    #[arg(long)]
    no_limits: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let params = Params::parse();

    let gen_config = ItemGenConfig::default()
        .with_num_items(params.items)
        .with_value_range(params.min_value, params.max_value)
        .with_weight_range(params.min_weight, params.max_weight)
        .with_seed(params.seed);
    let items = generate(&gen_config)?;
    let capacity = params.capacity.unwrap_or_else(|| default_capacity(&items));

    let mut config = CompareConfig::default().with_parallel(params.parallel);
    if !params.algorithms.is_empty() {
        config = config.with_algorithms(params.algorithms);
    }
    if params.no_limits {
        config = config.without_limits();
    }

    let report = CompareRunner::run(&items, capacity, &config)?;
    print!("{report}");

    if !report.agree() {
        anyhow::bail!("engines disagree on the optimal value: {:?}", report.best_values());
    }
    Ok(())
}
