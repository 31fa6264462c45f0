use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{LevelFilter, info};
use std::path::{Path, PathBuf};

use crate::config::AnalysisConfig;
use crate::experiment::{GenotypeSnapshot, RunKind, decode_ga, decode_sa, load_experiments, load_genotype, run_kind};
use crate::plot::{LoadedRuns, write_charts};

mod config;
mod experiment;
mod plot;

/// Compare GA and SA optimizer runs from their log files.
#[derive(Parser, Debug)]
#[command(name = "optilog")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Analysis configuration (TOML)
    #[arg(short, long, default_value = "optilog.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build all charts and write them to the output directory
    Plot,
    /// List every valid run with its final score
    List,
    /// Show the last genotype and bag of pieces of one log file
    Genotype {
        #[arg(value_name = "LOG")]
        path: PathBuf,
    },
}

fn main() {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("optilog"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Plot => {
            let config = AnalysisConfig::load(&cli.config)?;
            let runs = LoadedRuns::load(&load_experiments(&config));
            let written = write_charts(&runs, &config)?;
            info!("Wrote {} charts to {}", written.len(), config.output_dir.display());
        }
        Command::List => {
            let config = AnalysisConfig::load(&cli.config)?;
            let runs = LoadedRuns::load(&load_experiments(&config));
            print_runs(&runs);
        }
        Command::Genotype { path } => {
            if !path.is_file() {
                anyhow::bail!("Log file not found: {}", path.display());
            }
            print_genotype(&path, &load_genotype(&path));
        }
    }
    Ok(())
}

fn print_runs(runs: &LoadedRuns) {
    println!("GA runs ({})", runs.ga.len());
    for (run, series) in &runs.ga {
        println!(
            "  {:<40} {:>12} {:>6} gens  {}",
            run.label(),
            format_score(series.final_fitness()),
            series.points.len(),
            run.path().display()
        );
    }

    println!("SA runs ({})", runs.sa.len());
    for (run, series) in &runs.sa {
        println!(
            "  {:<40} {:>12} {:>6} moves  T={:<8} {}",
            run.label(),
            format_score(series.final_score()),
            series.updates.len(),
            format_score(series.final_temperature()),
            run.path().display()
        );
    }
}

fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_string(), |s| format!("{:.2}", s))
}

fn print_genotype(path: &Path, snapshot: &GenotypeSnapshot) {
    let label = match run_kind(path) {
        Some(RunKind::Ga) => decode_ga(path).valid().map(|run| run.label()),
        Some(RunKind::Sa) => decode_sa(path).valid().map(|run| run.label()),
        None => None,
    };
    if let Some(label) = label {
        println!("Run: {}", label);
    }

    println!("Bag pieces: {}", snapshot.pieces.join(" "));
    println!("Movements ({} rows):", snapshot.movements.len());
    for row in &snapshot.movements {
        let cells: Vec<String> = row.iter().map(i32::to_string).collect();
        println!("  {}", cells.join(", "));
    }
    println!("Last genotype block:");
    print!("{}", snapshot.block);
}
