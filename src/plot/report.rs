//! Build every chart of an analysis session and write them out.

use plotly::Plot;
use std::path::PathBuf;

use super::boxplot::build_boxplot;
use super::html::write_html;
use super::lineplot::{RunLine, build_line_plot, build_line_plot_by_pieces};
use super::table::{ScoredRun, scored};
use crate::config::AnalysisConfig;
use crate::experiment::{Experiments, GaRun, GaSeries, SaRun, SaSeries};

/// Runs of a session with their log series loaded.
#[derive(Debug, Clone, Default)]
pub struct LoadedRuns {
    pub ga: Vec<(GaRun, GaSeries)>,
    pub sa: Vec<(SaRun, SaSeries)>,
}

impl LoadedRuns {
    /// Read the log body of every run once.
    pub fn load(experiments: &Experiments) -> Self {
        let ga = experiments.ga.iter().map(|run| (run.clone(), run.load_series())).collect();
        let sa = experiments.sa.iter().map(|run| (run.clone(), run.load_series())).collect();
        Self { ga, sa }
    }

    pub fn scored_ga(&self) -> Vec<ScoredRun<GaRun>> {
        self.ga.iter().filter_map(|(run, series)| scored(run, series.final_fitness())).collect()
    }

    pub fn scored_sa(&self) -> Vec<ScoredRun<SaRun>> {
        self.sa.iter().filter_map(|(run, series)| scored(run, series.final_score())).collect()
    }

    fn ga_lines(&self) -> Vec<RunLine> {
        self.ga.iter().map(|(run, series)| RunLine::from_ga(run, series)).collect()
    }

    fn sa_lines(&self) -> Vec<RunLine> {
        self.sa.iter().map(|(run, series)| RunLine::from_sa(run, series)).collect()
    }
}

/// Build all charts, keyed by their output file name.
pub fn build_charts(runs: &LoadedRuns, config: &AnalysisConfig) -> Vec<(&'static str, Plot)> {
    let ga_lines = runs.ga_lines();
    let sa_lines = runs.sa_lines();

    vec![
        (
            "ga_boxplot.html",
            build_boxplot(&runs.scored_ga(), &config.ga_box_parameters, "GA Experiment Performance by Parameter"),
        ),
        (
            "sa_boxplot.html",
            build_boxplot(&runs.scored_sa(), &config.sa_box_parameters, "SA Experiment Performance by Parameter"),
        ),
        (
            "ga_lines.html",
            build_line_plot(&ga_lines, "GA: Generation vs Best Fitness - All Experiments"),
        ),
        (
            "ga_lines_by_pieces.html",
            build_line_plot_by_pieces(&ga_lines, "GA: Generation vs Best Fitness - Colored by Pieces"),
        ),
        (
            "sa_lines.html",
            build_line_plot(&sa_lines, "SA: Generation vs Best Fitness - All Experiments"),
        ),
        (
            "sa_lines_by_pieces.html",
            build_line_plot_by_pieces(&sa_lines, "SA: Generation vs Best Fitness - Colored by Pieces"),
        ),
    ]
}

/// Write every chart into `config.output_dir`, returning the written paths.
pub fn write_charts(runs: &LoadedRuns, config: &AnalysisConfig) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (file_name, plot) in build_charts(runs, config) {
        let path = config.output_dir.join(file_name);
        write_html(&plot, &path)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::load_experiments;
    use std::fs;
    use std::path::Path;

    fn write_log(path: &Path, body: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn session_writes_all_charts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_log(
            &root.join("GA/GA_Log_20251016_233329-Aleo_Simple-Pop_200-Mut_0.15-Pieces_10-Seed_42.log"),
            "Generation: 0. Score: -50\nGeneration: 1. Score: -41.5\n",
        );
        write_log(
            &root.join("GA/GA_Log_20251016_233400-Aleo_Double-Pop_200-Mut_0.15-Pieces_20-Seed_42.log"),
            "Initial poblation size: 200\n",
        );
        write_log(
            &root.join("SA/SA_Log_20251018_194113-Aleo_SwapDoble-Pieces_30-Tabu_1000-UpdFact_0.005-Seed_42.log"),
            "Gen: 5. Updated: -99.5. Temp: 20.0\nBest score: -99.5 Genotype:\n",
        );

        let config = AnalysisConfig::from_toml(&format!(
            "raw_path_ga = {:?}\nraw_path_sa = {:?}\noutput_dir = {:?}\n",
            root.join("GA"),
            root.join("SA"),
            root.join("charts"),
        ))
        .unwrap();

        let runs = LoadedRuns::load(&load_experiments(&config));
        assert_eq!(runs.ga.len(), 2);

        // The GA run without progress lines has no final score.
        let scored = runs.scored_ga();
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].score, -41.5);
        assert_eq!(runs.scored_sa()[0].score, -99.5);

        let written = write_charts(&runs, &config).unwrap();
        assert_eq!(written.len(), 6);
        for path in &written {
            assert!(path.is_file(), "missing {}", path.display());
        }

        let ga_box = fs::read_to_string(root.join("charts/ga_boxplot.html")).unwrap();
        assert!(ga_box.contains("GEN | NP=10"));
    }
}
