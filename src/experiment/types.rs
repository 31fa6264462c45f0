//! Type definitions for decoded runs and the series scanned from their logs.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Which optimizer produced a log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// Genetic algorithm.
    Ga,
    /// Simulated annealing with a tabu list.
    Sa,
}

/// Outcome of decoding a log filename.
///
/// A run only exists when its filename matched; everything else is carried
/// as `Invalid` so callers have to decide what to do with it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<R> {
    Valid(R),
    Invalid(PathBuf),
}

impl<R> ParseResult<R> {
    /// Convert into an `Option`, dropping the invalid path.
    pub fn valid(self) -> Option<R> {
        match self {
            ParseResult::Valid(run) => Some(run),
            ParseResult::Invalid(_) => None,
        }
    }
}

/// Metadata of one genetic-algorithm run, decoded from its filename.
#[derive(Debug, Clone, PartialEq)]
pub struct GaRun {
    pub path: PathBuf,
    pub date: NaiveDateTime,
    pub variant: String,
    pub population: u32,
    pub mutation_rate: f64,
    pub pieces: u32,
    pub seed: u64,
}

impl GaRun {
    /// Short display key: `GEN_<variant>-POP_<pop>-MUT_<pct>-NP_<pieces>`.
    pub fn label(&self) -> String {
        format!(
            "GEN_{}-POP_{}-MUT_{}-NP_{}",
            self.variant,
            self.population,
            self.mutation_label(),
            self.pieces
        )
    }

    /// Mutation rate as a whole percentage, rounded half to even (`0.125` -> `12`).
    pub fn mutation_percent(&self) -> f64 {
        (self.mutation_rate * 100.0).round_ties_even()
    }

    /// Mutation rate as shown in labels, e.g. `15%`.
    pub fn mutation_label(&self) -> String {
        format!("{}%", self.mutation_percent())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Metadata of one simulated-annealing run, decoded from its filename.
#[derive(Debug, Clone, PartialEq)]
pub struct SaRun {
    pub path: PathBuf,
    pub date: NaiveDateTime,
    pub variant: String,
    pub pieces: u32,
    pub tabu: u32,
    pub update_factor: f64,
    pub seed: u64,
}

impl SaRun {
    /// Short display key: `GEN_<variant>-NP_<pieces>-TAB_<tabu>-UPF_<updf>`.
    pub fn label(&self) -> String {
        format!(
            "GEN_{}-NP_{}-TAB_{}-UPF_{}",
            self.variant,
            self.pieces,
            self.tabu,
            self.update_factor_label()
        )
    }

    /// Update factor as shown in labels (`0.005`, `5e-05`).
    pub fn update_factor_label(&self) -> String {
        format_float(self.update_factor)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Shortest round-trip form of `value`.
///
/// Plain decimal for exponents in `-4..16` (always with a fractional part),
/// exponent notation with a signed two-digit exponent otherwise:
/// `0.005`, `1.0`, `5e-05`, `1.5e-12`, `1e+16`.
pub fn format_float(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        format!("{:?}", value)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// Best fitness per generation of a GA run, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GaSeries {
    pub points: Vec<(u64, f64)>,
}

impl GaSeries {
    pub fn generations(&self) -> Vec<u64> {
        self.points.iter().map(|(g, _)| *g).collect()
    }

    pub fn fitness(&self) -> Vec<f64> {
        self.points.iter().map(|(_, f)| *f).collect()
    }

    /// Best fitness reported by the last logged generation.
    pub fn final_fitness(&self) -> Option<f64> {
        self.points.last().map(|(_, f)| *f)
    }
}

/// One accepted move of an SA run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaPoint {
    pub generation: u64,
    pub fitness: f64,
    pub temperature: f64,
}

/// Series scanned from an SA log.
///
/// `updates` holds every accepted move; `best_scores` holds the sparse
/// "Best score" checkpoints, each keyed to the last generation seen before it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaSeries {
    pub updates: Vec<SaPoint>,
    pub best_scores: Vec<(u64, f64)>,
}

impl SaSeries {
    pub fn generations(&self) -> Vec<u64> {
        self.updates.iter().map(|p| p.generation).collect()
    }

    pub fn fitness(&self) -> Vec<f64> {
        self.updates.iter().map(|p| p.fitness).collect()
    }

    /// Temperature of the last accepted move.
    pub fn final_temperature(&self) -> Option<f64> {
        self.updates.last().map(|p| p.temperature)
    }

    /// Last best-score checkpoint, falling back to the last accepted fitness.
    pub fn final_score(&self) -> Option<f64> {
        self.best_scores
            .last()
            .map(|(_, s)| *s)
            .or_else(|| self.updates.last().map(|p| p.fitness))
    }
}

/// Last genotype block of a log together with the bag it was played on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenotypeSnapshot {
    /// Raw text from the last `Genotype` marker line to end of file.
    pub block: String,
    /// Piece tokens from the last `Bag pieces:` line.
    pub pieces: Vec<String>,
    /// Integer movement rows recovered from the block.
    pub movements: Vec<Vec<i32>>,
}
