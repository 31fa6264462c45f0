//! Flat parameter table feeding the box plots.
//!
//! Rows are built straight from the decoded run fields; the plotting layer
//! never re-parses display labels.

use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;

use crate::experiment::{GaRun, SaRun};

/// Sweep parameters of GA runs, named by their label codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum GaParam {
    #[serde(rename = "GEN")]
    Variant,
    #[serde(rename = "POP")]
    Population,
    #[serde(rename = "MUT")]
    Mutation,
}

impl fmt::Display for GaParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            GaParam::Variant => "GEN",
            GaParam::Population => "POP",
            GaParam::Mutation => "MUT",
        };
        f.write_str(code)
    }
}

/// Sweep parameters of SA runs, named by their label codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SaParam {
    #[serde(rename = "GEN")]
    Variant,
    #[serde(rename = "TAB")]
    Tabu,
    #[serde(rename = "UPF")]
    UpdateFactor,
}

impl fmt::Display for SaParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            SaParam::Variant => "GEN",
            SaParam::Tabu => "TAB",
            SaParam::UpdateFactor => "UPF",
        };
        f.write_str(code)
    }
}

/// A parameter value: what to show plus how to order it.
///
/// Numeric values sort numerically, text sorts lexically; numbers come first
/// if both kinds ever meet.
#[derive(Debug, Clone)]
pub struct ParamValue {
    pub display: String,
    key: SortKey,
}

#[derive(Debug, Clone)]
enum SortKey {
    Number(f64),
    Text(String),
}

impl ParamValue {
    pub fn text(value: impl Into<String>) -> Self {
        let display = value.into();
        Self {
            key: SortKey::Text(display.clone()),
            display,
        }
    }

    pub fn number(display: impl Into<String>, value: f64) -> Self {
        Self {
            display: display.into(),
            key: SortKey::Number(value),
        }
    }
}

impl Ord for ParamValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.key, &other.key) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for ParamValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ParamValue {}

/// A run that can be placed in a parameter sweep.
pub trait SweepRecord {
    type Param: Copy + fmt::Display;

    fn label(&self) -> String;
    fn pieces(&self) -> u32;
    fn param_value(&self, param: Self::Param) -> ParamValue;
}

impl SweepRecord for GaRun {
    type Param = GaParam;

    fn label(&self) -> String {
        GaRun::label(self)
    }

    fn pieces(&self) -> u32 {
        self.pieces
    }

    fn param_value(&self, param: GaParam) -> ParamValue {
        match param {
            GaParam::Variant => ParamValue::text(self.variant.clone()),
            GaParam::Population => ParamValue::number(self.population.to_string(), f64::from(self.population)),
            // Grouped by the rounded percentage shown in the label.
            GaParam::Mutation => ParamValue::number(self.mutation_label(), self.mutation_percent()),
        }
    }
}

impl SweepRecord for SaRun {
    type Param = SaParam;

    fn label(&self) -> String {
        SaRun::label(self)
    }

    fn pieces(&self) -> u32 {
        self.pieces
    }

    fn param_value(&self, param: SaParam) -> ParamValue {
        match param {
            SaParam::Variant => ParamValue::text(self.variant.clone()),
            SaParam::Tabu => ParamValue::number(self.tabu.to_string(), f64::from(self.tabu)),
            SaParam::UpdateFactor => ParamValue::number(self.update_factor_label(), self.update_factor),
        }
    }
}

/// A run paired with its final score.
#[derive(Debug, Clone)]
pub struct ScoredRun<R> {
    pub score: f64,
    pub run: R,
}

/// Pair a run with its score, skipping runs whose log held no data points.
pub fn scored<R: SweepRecord + Clone>(run: &R, score: Option<f64>) -> Option<ScoredRun<R>> {
    match score {
        Some(score) => Some(ScoredRun { score, run: run.clone() }),
        None => {
            log::debug!("No data points for {}, leaving it out of the box plot", run.label());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::path::PathBuf;

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 18).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn ga(variant: &str, population: u32, mutation_rate: f64) -> GaRun {
        GaRun {
            path: PathBuf::from("x.log"),
            date: date(),
            variant: variant.into(),
            population,
            mutation_rate,
            pieces: 10,
            seed: 42,
        }
    }

    #[test]
    fn numeric_values_sort_numerically() {
        let mut values = vec![
            ga("Simple", 20000, 0.1).param_value(GaParam::Population),
            ga("Simple", 500, 0.1).param_value(GaParam::Population),
            ga("Simple", 5000, 0.1).param_value(GaParam::Population),
        ];
        values.sort();
        let shown: Vec<&str> = values.iter().map(|v| v.display.as_str()).collect();
        assert_eq!(shown, vec!["500", "5000", "20000"]);
    }

    #[test]
    fn mutation_groups_by_shown_percentage() {
        let a = ga("Simple", 10, 0.151).param_value(GaParam::Mutation);
        let b = ga("Simple", 10, 0.149).param_value(GaParam::Mutation);
        assert_eq!(a.display, "15%");
        assert_eq!(a, b);

        let c = ga("Simple", 10, 0.05).param_value(GaParam::Mutation);
        assert!(c < a);
    }

    #[test]
    fn mutation_half_percent_groups_with_its_label() {
        let tie = ga("Simple", 10, 0.125).param_value(GaParam::Mutation);
        let above = ga("Simple", 10, 0.13).param_value(GaParam::Mutation);
        let below = ga("Simple", 10, 0.12).param_value(GaParam::Mutation);

        assert_eq!(tie.display, "12%");
        assert_eq!(above.display, "13%");
        assert_ne!(tie, above);
        assert_eq!(tie, below);
    }

    #[test]
    fn variant_sorts_lexically() {
        let a = ga("SwapDoble", 10, 0.1).param_value(GaParam::Variant);
        let b = ga("Double", 10, 0.1).param_value(GaParam::Variant);
        assert!(b < a);
    }

    #[test]
    fn sa_update_factor_matches_label_format() {
        let run = SaRun {
            path: PathBuf::from("x.log"),
            date: date(),
            variant: "Simple".into(),
            pieces: 10,
            tabu: 100,
            update_factor: 5e-5,
            seed: 42,
        };
        assert_eq!(run.param_value(SaParam::UpdateFactor).display, "5e-05");
        assert_eq!(run.param_value(SaParam::Tabu).display, "100");
    }

    #[test]
    fn runs_without_score_are_skipped() {
        let run = ga("Simple", 10, 0.1);
        assert!(scored(&run, None).is_none());
        assert_eq!(scored(&run, Some(-4.5)).unwrap().score, -4.5);
    }
}
