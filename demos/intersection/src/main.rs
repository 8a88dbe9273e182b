//! intersection — traffic-light simulation of Main Street × Church Street.
//!
//! Vehicles arrive in random batches, queue in one of eight lanes, and are
//! released by alternating north/south and east/west light phases until the
//! vehicle cap is reached and every queue has drained.  The departure log is
//! written to `output.txt` (or `--output`); `--csv` adds a departure table.
//!
//! Set `RUST_LOG=debug` to trace phases and arrival batches.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use ix_core::{LaneQueueId, SimConfig};
use ix_output::{CsvWriter, OutputError, ReportObserver, TextReportWriter};
use ix_sim::{RunSummary, SimBuilder, SimObserver};

#[derive(Parser)]
#[command(name = "intersection")]
#[command(about = "Simulate a two-phase traffic light at Main Street and Church Street")]
struct Cli {
    /// Departure log path
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,

    /// Also write one CSV row per departure to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with `SimConfig` overrides; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not print the run summary
    #[arg(long)]
    quiet: bool,
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))
}

/// Run to completion and surface the first sink error, if any.
fn run_with<O: SimObserver>(
    config: SimConfig,
    observer: &mut O,
    take_errors: impl FnOnce(&mut O) -> Option<OutputError>,
) -> Result<RunSummary> {
    let mut sim = SimBuilder::new(config).build().context("invalid configuration")?;
    let result = sim.run(observer);
    if let Some(e) = take_errors(observer) {
        return Err(e).context("writing report");
    }
    Ok(result?)
}

fn print_summary(summary: &RunSummary, elapsed_secs: f64) {
    println!("Simulation complete in {elapsed_secs:.3} s");
    println!(
        "  vehicles   : {} admitted, {} departed",
        summary.admitted, summary.departed
    );
    println!("  final time : {}s", summary.final_tick.0);
    println!(
        "  phases     : {} north/south, {} east/west",
        summary.ns_phases, summary.ew_phases
    );
    println!(
        "  wait       : mean {:.1}s, max {}s",
        summary.mean_wait_secs(),
        summary.max_wait_secs
    );
    println!();

    println!("{:<14} {:>10}", "Queue", "Departed");
    println!("{}", "-".repeat(25));
    for lane in LaneQueueId::ALL {
        println!("{:<14} {:>10}", lane.to_string(), summary.departures(lane));
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    info!(
        "seed {} | cap {} | north/south {}s | east/west {}s",
        config.seed,
        config.vehicle_cap,
        config.ns_phase_secs(),
        config.ew_phase_secs(),
    );

    // Both sinks open before any simulation work.
    let text = TextReportWriter::create(&cli.output)
        .with_context(|| format!("creating report {}", cli.output.display()))?;
    let mut report = ReportObserver::new(text);

    let t0 = Instant::now();
    let summary = match &cli.csv {
        Some(path) => {
            let csv = CsvWriter::new(path)
                .with_context(|| format!("creating CSV table {}", path.display()))?;
            let mut both = (report, ReportObserver::new(csv));
            run_with(config, &mut both, |(a, b)| a.take_error().or_else(|| b.take_error()))?
        }
        None => run_with(config, &mut report, ReportObserver::take_error)?,
    };
    let elapsed = t0.elapsed();

    if !cli.quiet {
        println!("Report written to {}", cli.output.display());
        if let Some(path) = &cli.csv {
            println!("CSV table written to {}", path.display());
        }
        print_summary(&summary, elapsed.as_secs_f64());
    }

    Ok(())
}
