//! Discover optimizer logs on disk and decode them into runs.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::filename::{decode_ga, decode_sa};
use super::types::{GaRun, ParseResult, RunKind, SaRun};
use crate::config::AnalysisConfig;

/// All valid runs of one analysis session.
#[derive(Debug, Clone, Default)]
pub struct Experiments {
    pub ga: Vec<GaRun>,
    pub sa: Vec<SaRun>,
}

/// Walk the configured log directories and decode every log filename.
///
/// GA logs come from `raw_path_ga` and `show_path_ga`, SA logs from
/// `raw_path_sa`. Files whose name does not decode are dropped; the decoder
/// has already logged a warning for each of them.
pub fn load_experiments(config: &AnalysisConfig) -> Experiments {
    let mut ga_files = list_log_files(&config.raw_path_ga, RunKind::Ga);
    if let Some(show_path) = &config.show_path_ga {
        ga_files.extend(list_log_files(show_path, RunKind::Ga));
    }
    let sa_files = list_log_files(&config.raw_path_sa, RunKind::Sa);

    log::info!("Found {} GA logs and {} SA logs", ga_files.len(), sa_files.len());

    let ga = keep_valid(ga_files.iter().map(|p| decode_ga(p)));
    log::info!("Loaded {} valid GA experiments", ga.len());

    let sa = keep_valid(sa_files.iter().map(|p| decode_sa(p)));
    log::info!("Loaded {} valid SA experiments", sa.len());

    Experiments { ga, sa }
}

/// Collect the files under `root` whose name mentions the optimizer kind,
/// sorted by path.
pub fn list_log_files(root: &Path, kind: RunKind) -> Vec<PathBuf> {
    if !root.is_dir() {
        log::warn!("Log directory not found: {}", root.display());
        return Vec::new();
    }

    let tag = match kind {
        RunKind::Ga => "GA",
        RunKind::Sa => "SA",
    };

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().contains(tag))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

fn keep_valid<R>(results: impl Iterator<Item = ParseResult<R>>) -> Vec<R> {
    let mut invalid = 0usize;
    let valid: Vec<R> = results
        .filter_map(|result| match result {
            ParseResult::Valid(run) => Some(run),
            ParseResult::Invalid(_) => {
                invalid += 1;
                None
            }
        })
        .collect();

    if invalid > 0 {
        log::warn!("Dropped {} logs with unrecognized file names", invalid);
    }
    valid
}
