//! Permissive log file reading.
//!
//! Optimizer logs are appended by a game engine and occasionally contain
//! truncated or non-UTF-8 bytes. The loader never fails on content: invalid
//! sequences are replaced with U+FFFD and scanning continues.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::log_parser::{extract_genotype, parse_ga_log, parse_sa_log};
use super::types::{GaRun, GaSeries, GenotypeSnapshot, SaRun, SaSeries};

/// Buffer size for reading log files (64KB).
const BUFFER_SIZE: usize = 64 * 1024;

/// Fully buffered, lossily decoded log body.
pub struct LogLoader {
    text: String,
}

impl LogLoader {
    /// Read a log file.
    ///
    /// # Returns
    ///
    /// `Ok(LogLoader)` if the file could be read, `Err` on I/O failure.
    /// Undecodable bytes are not an error.
    pub fn open(path: &Path) -> Result<Self, std::io::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Read a log file, treating an unreadable file as an empty log.
    pub fn open_or_empty(path: &Path) -> Self {
        match Self::open(path) {
            Ok(loader) => loader,
            Err(e) => {
                log::warn!("Error reading log file {}: {}", path.display(), e);
                Self { text: String::new() }
            }
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            text: String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    /// Iterate over the lines of the log, without line terminators.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }
}

/// Read the last genotype block and bag of pieces from any optimizer log.
pub fn load_genotype(path: &Path) -> GenotypeSnapshot {
    extract_genotype(LogLoader::open_or_empty(path).lines())
}

impl GaRun {
    /// Scan this run's log for its best-fitness series.
    pub fn load_series(&self) -> GaSeries {
        parse_ga_log(LogLoader::open_or_empty(&self.path).lines())
    }
}

impl SaRun {
    /// Scan this run's log for its accepted moves and best-score checkpoints.
    pub fn load_series(&self) -> SaSeries {
        parse_sa_log(LogLoader::open_or_empty(&self.path).lines())
    }
}
