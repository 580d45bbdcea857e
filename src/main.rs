use clap::Parser;
use tracing::{info, warn};

use rr_model::config::WorkloadFile;
use rr_model::core::simulate;
use rr_model::report;
use rr_model::scheduler::{PriorityRoundRobin, RoundRobin, RoundRobinScheduler};
use rr_model::sim::{Comparison, ComparisonHarness};
use rr_model::workload::{BernoulliWorkload, Presets, WorkloadDataset, WorkloadProvider};

/// Round Robin scheduling simulator: runs each workload under Round Robin and
/// Priority Round Robin and compares their average timings.
#[derive(Parser, Debug)]
#[command(name = "rr_model", version, about)]
struct Cli {
    /// `presets`, `random`, or a path to a TOML workload file.
    #[arg(long, env = "RR_WORKLOAD", default_value = "presets")]
    workload: String,

    /// Override every dataset's quantum.
    #[arg(long, env = "RR_QUANTUM")]
    quantum: Option<u64>,

    /// Seed for `--workload random`.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Ticks over which random arrivals are drawn.
    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Per-tick arrival probability for random workloads.
    #[arg(long, default_value_t = 0.3)]
    arrival_rate: f64,

    /// Print the Round Robin execution timeline of each dataset.
    #[arg(long)]
    trace: bool,

    /// Emit results as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

fn load_datasets(cli: &Cli) -> anyhow::Result<Vec<WorkloadDataset>> {
    let datasets = match cli.workload.as_str() {
        "presets" => Presets.datasets(),
        "random" => BernoulliWorkload {
            ticks: cli.ticks,
            p_arrival: cli.arrival_rate,
            seed: cli.seed,
            ..Default::default()
        }
        .datasets(),
        path => {
            let file = WorkloadFile::from_file(path)?;
            info!(path, datasets = file.datasets.len(), "loaded workload file");
            file.datasets()
        }
    };

    Ok(match cli.quantum {
        Some(quantum) => datasets.iter().map(|d| d.with_quantum(quantum)).collect(),
        None => datasets,
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let datasets = load_datasets(&cli)?;
    info!(datasets = datasets.len(), "starting comparison");

    let harness = ComparisonHarness::new()
        .with(&RoundRobin)
        .with(&PriorityRoundRobin);

    let mut comparisons: Vec<Comparison> = Vec::new();
    for dataset in &datasets {
        let comparison = match harness.run(dataset) {
            Ok(comparison) => comparison,
            Err(e) => {
                warn!(dataset = %dataset.name, error = %e, "skipping dataset");
                continue;
            }
        };

        if !cli.json {
            println!("{}", report::dataset_header(dataset));
            if cli.trace {
                let outcome =
                    simulate::<RoundRobinScheduler>(&dataset.processes, dataset.quantum)?;
                println!("{}", report::timeline(&outcome.timeline));
            }
            for run in &comparison.runs {
                println!("{}", report::metrics_table(&run.strategy, &run.metrics));
            }
        }
        comparisons.push(comparison);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&comparisons)?);
    } else {
        println!("{}", report::summary(&comparisons));
    }

    Ok(())
}
