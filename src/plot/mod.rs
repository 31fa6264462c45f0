//! Chart construction over the decoded runs.
//!
//! - `table`: structured sweep parameters and final scores
//! - `boxplot`: score distributions per parameter value with a dropdown filter
//! - `lineplot`: fitness-vs-generation lines, optionally grouped by pieces
//! - `theme` / `html`: shared dark layout and standalone HTML output
//! - `report`: builds and writes every chart of a session

pub mod boxplot;
pub mod colors;
pub mod html;
pub mod lineplot;
pub mod report;
pub mod table;
pub mod theme;

pub use report::{LoadedRuns, write_charts};
pub use table::{GaParam, SaParam};
