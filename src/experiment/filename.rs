//! Decode run metadata from log filenames.
//!
//! Both optimizers encode their parameters in the name of the log they write:
//!
//! ```text
//! GA_Log_20251016_233329-Aleo_Simple-Pop_20000-Mut_0.15-Pieces_10-Seed_42.log
//! SA_Log_20251018_130906-Aleo_Simple-Pieces_10-Tabu_100-UpdFact_5E-05-Seed_42.log
//! ```
//!
//! The pattern is searched anywhere in the path, so parent directories do not
//! matter.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::Path;
use std::str::FromStr;

use super::types::{GaRun, ParseResult, RunKind, SaRun};

/// Timestamp layout used in filenames (`yyyymmdd_HHMMSS`).
const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

static GA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"GA_Log_(\d{8}_\d{6})-Aleo_([\w-]+)-Pop_(\d+)-Mut_(\d+\.?\d*)-Pieces_(\d+)-Seed_(\d+)")
        .expect("Invalid GA filename regex")
});

static SA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"SA_Log_(\d{8}_\d{6})-Aleo_([\w-]+)-Pieces_(\d+)-Tabu_(\d+)-UpdFact_([\d.]+(?:E-?\d+)?)-Seed_(\d+)")
        .expect("Invalid SA filename regex")
});

/// Decode a genetic-algorithm log path.
///
/// Returns `ParseResult::Invalid` (and logs a warning) when the name does not
/// follow the GA layout or one of its fields does not convert.
pub fn decode_ga(path: &Path) -> ParseResult<GaRun> {
    let name = path.to_string_lossy();
    let run = GA_PATTERN.captures(&name).and_then(|caps| {
        Some(GaRun {
            path: path.to_path_buf(),
            date: parse_date(&caps[1])?,
            variant: caps[2].to_string(),
            population: field(&caps, 3)?,
            mutation_rate: field(&caps, 4)?,
            pieces: field(&caps, 5)?,
            seed: field(&caps, 6)?,
        })
    });

    match run {
        Some(run) => ParseResult::Valid(run),
        None => {
            log::warn!("Invalid experiment file name: {}", path.display());
            ParseResult::Invalid(path.to_path_buf())
        }
    }
}

/// Decode a simulated-annealing log path.
///
/// The update factor may be written in plain or scientific notation
/// (`0.005`, `5E-05`).
pub fn decode_sa(path: &Path) -> ParseResult<SaRun> {
    let name = path.to_string_lossy();
    let run = SA_PATTERN.captures(&name).and_then(|caps| {
        Some(SaRun {
            path: path.to_path_buf(),
            date: parse_date(&caps[1])?,
            variant: caps[2].to_string(),
            pieces: field(&caps, 3)?,
            tabu: field(&caps, 4)?,
            update_factor: field(&caps, 5)?,
            seed: field(&caps, 6)?,
        })
    });

    match run {
        Some(run) => ParseResult::Valid(run),
        None => {
            log::warn!("Invalid experiment file name: {}", path.display());
            ParseResult::Invalid(path.to_path_buf())
        }
    }
}

/// Guess which optimizer wrote a log from its file name prefix.
pub fn run_kind(path: &Path) -> Option<RunKind> {
    let name = path.file_name()?.to_string_lossy();
    if name.starts_with("GA_Log_") {
        Some(RunKind::Ga)
    } else if name.starts_with("SA_Log_") {
        Some(RunKind::Sa)
    } else {
        None
    }
}

fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, DATE_FORMAT).ok()
}

fn field<T: FromStr>(caps: &Captures<'_>, index: usize) -> Option<T> {
    caps.get(index)?.as_str().parse().ok()
}
