//! Experiment module: decoding optimizer logs into runs and series.
//!
//! Provides functionality for:
//! - Decoding run parameters from GA/SA log filenames
//! - Permissive (lossy UTF-8) log reading
//! - Scanning fitness, temperature and best-score series out of log bodies
//! - Recovering the last logged genotype and bag of pieces

pub mod discovery;
pub mod filename;
pub mod log_loader;
pub mod log_parser;
pub mod types;

pub use discovery::{Experiments, load_experiments};
pub use filename::{decode_ga, decode_sa, run_kind};
pub use log_loader::load_genotype;
pub use types::{GaRun, GaSeries, GenotypeSnapshot, RunKind, SaRun, SaSeries};
