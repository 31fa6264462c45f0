//! Scan optimizer log bodies and extract numeric series.
//!
//! Supports the following log line formats:
//! - GA progress: `Generation: <int>. <label>: <float>`
//! - SA accepted move: `Gen: <int>. Updated: <float>. Temp: <float>`
//! - SA checkpoint: `Best score: <float> Genotype...`
//! - Bag declaration: `Bag pieces: <token> <token> ...`
//! - Genotype block delimiter: any line containing `Genotype`
//!
//! Lines may carry a `[yyyy-mm-dd HH:MM:SS]` prefix. Lines that do not match
//! are skipped silently.

use super::types::{GaSeries, GenotypeSnapshot, SaPoint, SaSeries};

const GA_MARKER: &str = "Generation";
const GA_DELIMITER: &str = ". ";
const FIELD_SEPARATOR: &str = ": ";
const SA_GEN_MARKER: &str = "Gen:";
const SA_UPDATE_MARKER: &str = "Updated:";
const SA_TEMP_MARKER: &str = "Temp:";
const SA_BEST_MARKER: &str = "Best score:";
const GENOTYPE_MARKER: &str = "Genotype";
const BAG_MARKER: &str = "Bag pieces:";

/// Parse every GA progress line of a log body, in file order.
pub fn parse_ga_log<'a>(lines: impl IntoIterator<Item = &'a str>) -> GaSeries {
    let points = lines.into_iter().filter_map(parse_ga_line).collect();
    GaSeries { points }
}

/// Parse a single GA progress line.
///
/// # Parameters
///
/// * `line` - A single log line, with or without a timestamp prefix
///
/// # Returns
///
/// `Some((generation, fitness))` if parsing succeeds, `None` for any other line.
///
/// ```text
/// [2025-10-16 23:40:12] Generation: 12. Best Fitness: -45.67
/// ```
pub fn parse_ga_line(line: &str) -> Option<(u64, f64)> {
    if !line.contains(GA_MARKER) {
        return None;
    }

    let mut parts = line.trim().split(GA_DELIMITER);
    let generation_part = parts.next()?;
    let fitness_part = parts.next()?;

    let generation = generation_part.split(FIELD_SEPARATOR).nth(1)?.trim().parse().ok()?;
    let fitness = fitness_part.split(FIELD_SEPARATOR).nth(1)?.trim().parse().ok()?;

    Some((generation, fitness))
}

/// Parse an SA log body into its accepted-move series and its checkpoints.
///
/// A `Best score` checkpoint is attributed to the generation of the most
/// recent accepted move; checkpoints logged before any move are dropped.
pub fn parse_sa_log<'a>(lines: impl IntoIterator<Item = &'a str>) -> SaSeries {
    let mut series = SaSeries::default();
    let mut generation: Option<u64> = None;

    for line in lines {
        if let Some(point) = parse_sa_update(line) {
            generation = Some(point.generation);
            series.updates.push(point);
        }

        if let Some(current) = generation {
            if let Some(score) = parse_best_score(line) {
                series.best_scores.push((current, score));
            }
        }
    }

    series
}

/// Parse an accepted-move line.
///
/// # Parameters
///
/// * `line` - A single log line; it must carry both `Gen:` and `Updated:`
///
/// # Returns
///
/// `Some(SaPoint)` with generation, fitness and temperature, `None` if any of
/// the three numbers is missing.
///
/// ```text
/// [2025-10-18 19:13:04] Gen: 4466. Updated: -164.6786. Temp: 10.71466
/// ```
pub fn parse_sa_update(line: &str) -> Option<SaPoint> {
    if !(line.contains(SA_GEN_MARKER) && line.contains(SA_UPDATE_MARKER)) {
        return None;
    }

    Some(SaPoint {
        generation: number_after(line, SA_GEN_MARKER)?,
        fitness: number_after(line, SA_UPDATE_MARKER)?,
        temperature: number_after(line, SA_TEMP_MARKER)?,
    })
}

/// Parse the score of a `Best score:` checkpoint line.
pub fn parse_best_score(line: &str) -> Option<f64> {
    let pos = line.find(SA_BEST_MARKER)?;
    let rest = &line[pos + SA_BEST_MARKER.len()..];
    let score = rest.split_once(GENOTYPE_MARKER).map_or(rest, |(score, _)| score);
    parse_number(score.trim())
}

/// Capture the last genotype block and the last declared bag of pieces.
///
/// # Parameters
///
/// * `lines` - The log body, in file order
///
/// # Returns
///
/// A `GenotypeSnapshot` holding every line from the last `Genotype` marker to
/// the end, the tokens of the last `Bag pieces:` line, and the integer rows
/// found in that block. All parts are empty for a log without them.
pub fn extract_genotype<'a>(lines: impl IntoIterator<Item = &'a str>) -> GenotypeSnapshot {
    let mut block = String::new();
    let mut pieces = Vec::new();

    for line in lines {
        if let Some(pos) = line.find(BAG_MARKER) {
            pieces = line[pos + BAG_MARKER.len()..].split_whitespace().map(str::to_string).collect();
        }

        if line.contains(GENOTYPE_MARKER) {
            block.clear();
        }

        block.push_str(line);
        block.push('\n');
    }

    let movements = block.lines().filter_map(parse_movement_row).collect();

    GenotypeSnapshot { block, pieces, movements }
}

/// Parse a line made only of integers, e.g. `{ 1, 2, -1, 3, 1 },` or `0 3 2 0 0`.
fn parse_movement_row(line: &str) -> Option<Vec<i32>> {
    let content = strip_timestamp(line);
    let row: Vec<i32> = content
        .split(|c: char| c == ',' || c == '{' || c == '}' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse().ok())
        .collect::<Option<_>>()?;

    if row.is_empty() { None } else { Some(row) }
}

/// Drop a leading `[...]` timestamp, if any.
fn strip_timestamp(line: &str) -> &str {
    let trimmed = line.trim_start();
    if trimmed.starts_with('[') {
        if let Some(end) = trimmed.find(']') {
            return &trimmed[end + 1..];
        }
    }
    trimmed
}

/// Extract the number following `marker`.
fn number_after<T: std::str::FromStr>(line: &str, marker: &str) -> Option<T> {
    let pos = line.find(marker)?;
    let remaining = line[pos + marker.len()..].trim_start();

    let end = remaining
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(remaining.len());

    parse_number(&remaining[..end])
}

/// Parse a numeric token, ignoring trailing punctuation such as a sentence
/// period (`4466.`).
fn parse_number<T: std::str::FromStr>(token: &str) -> Option<T> {
    let token = token.trim_end_matches(|c: char| !c.is_ascii_digit());
    if token.is_empty() {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ga_line() {
        assert_eq!(parse_ga_line("Generation: 12. Best Fitness: -45.67"), Some((12, -45.67)));
        assert_eq!(
            parse_ga_line("[2025-10-16 23:40:12] Generation: 3. Score: 101.5"),
            Some((3, 101.5))
        );
    }

    #[test]
    fn test_parse_ga_line_skips_malformed() {
        assert_eq!(parse_ga_line("Initial poblation size: 20000"), None);
        assert_eq!(parse_ga_line("Generation: twelve. Score: 1.0"), None);
        assert_eq!(parse_ga_line("Generation: 12"), None);
        assert_eq!(parse_ga_line("SA finished after 400 generations."), None);
    }

    #[test]
    fn test_parse_ga_log_keeps_order_and_values() {
        let body = "\
[2025-10-16 23:33:29] Initial poblation size: 20000
[2025-10-16 23:33:29] Bag pieces: I O T S Z J L
[2025-10-16 23:33:30] Generation: 0. Fitness: -120.5
[2025-10-16 23:33:31] Generation: 1. Fitness: -98.25
garbage line
[2025-10-16 23:33:32] Generation: 2. Fitness: -98.25
[2025-10-16 23:33:33] Generation: 3. Fitness: -60";
        let series = parse_ga_log(body.lines());
        assert_eq!(series.points, vec![(0, -120.5), (1, -98.25), (2, -98.25), (3, -60.0)]);
        assert_eq!(series.generations(), vec![0, 1, 2, 3]);
        assert_eq!(series.final_fitness(), Some(-60.0));
    }

    #[test]
    fn test_parse_sa_update() {
        let point = parse_sa_update("[2025-10-18 19:13:04] Gen: 4466. Updated: -164.6786. Temp: 10.71466").unwrap();
        assert_eq!(point.generation, 4466);
        assert_eq!(point.fitness, -164.6786);
        assert_eq!(point.temperature, 10.71466);
    }

    #[test]
    fn test_parse_sa_update_scientific_temperature() {
        let point = parse_sa_update("Gen: 9. Updated: -3.5. Temp: 1.5E-05").unwrap();
        assert_eq!(point.temperature, 1.5e-5);
    }

    #[test]
    fn test_parse_sa_update_requires_both_markers() {
        assert_eq!(parse_sa_update("Gen: 4467. Rejected: -164.6786. Temp: 10.7"), None);
        assert_eq!(parse_sa_update("Updated: -164.6786. Temp: 10.7"), None);
        assert_eq!(parse_sa_update("Gen: 4467. Updated: -164.6786."), None);
    }

    #[test]
    fn test_parse_best_score_with_and_without_genotype() {
        assert_eq!(parse_best_score("[2025-10-18 19:13:02] Best score: -180.5 Genotype:"), Some(-180.5));
        assert_eq!(parse_best_score("Best score: -42.25"), Some(-42.25));
        assert_eq!(parse_best_score("Best score: Genotype:"), None);
        assert_eq!(parse_best_score("Gen: 3. Updated: -1. Temp: 2"), None);
    }

    #[test]
    fn test_best_scores_follow_latest_generation() {
        let body = "\
[2025-10-18 19:13:00] Best score: -200.0 Genotype:
[2025-10-18 19:13:01] Gen: 10. Updated: -180.5. Temp: 50.0
[2025-10-18 19:13:01] Gen: 11. Rejected: -180.5. Temp: 49.9
[2025-10-18 19:13:02] Best score: -180.5 Genotype:
[2025-10-18 19:13:03] Gen: 25. Updated: -170.25. Temp: 45.5
[2025-10-18 19:13:04] Gen: 40. Updated: -155.9286. Temp: 40.1
[2025-10-18 19:13:04] Best score: -155.9286 Genotype:";
        let series = parse_sa_log(body.lines());

        assert_eq!(series.generations(), vec![10, 25, 40]);
        assert_eq!(series.fitness(), vec![-180.5, -170.25, -155.9286]);
        assert_eq!(series.final_temperature(), Some(40.1));
        assert_eq!(series.best_scores, vec![(10, -180.5), (40, -155.9286)]);
        assert_eq!(series.final_score(), Some(-155.9286));
    }

    #[test]
    fn test_extract_genotype_keeps_last_block() {
        let body = "\
[2025-10-18 19:10:00] Bag pieces: I O T
[2025-10-18 19:10:01] Best score: -300 Genotype:
{ 9, 9, 9 },
[2025-10-18 19:11:00] Gen: 3. Updated: -250. Temp: 10
[2025-10-18 19:12:00] Bag pieces: S Z J L
[2025-10-18 19:13:04] Best score: -155.9286 Genotype:
{ 1, 2, -1, 3, 1 },
{ 0, 3, 3, -4, 3 },
[2025-10-18 19:13:05] SA Manager destroyed.";
        let snapshot = extract_genotype(body.lines());

        assert!(snapshot.block.starts_with("[2025-10-18 19:13:04] Best score: -155.9286 Genotype:\n"));
        assert!(snapshot.block.ends_with("SA Manager destroyed.\n"));
        assert!(!snapshot.block.contains("9, 9, 9"));
        assert_eq!(snapshot.pieces, vec!["S", "Z", "J", "L"]);
        assert_eq!(snapshot.movements, vec![vec![1, 2, -1, 3, 1], vec![0, 3, 3, -4, 3]]);
    }

    #[test]
    fn test_extract_genotype_without_marker_keeps_whole_body() {
        let snapshot = extract_genotype("a\nb".lines());
        assert_eq!(snapshot.block, "a\nb\n");
        assert!(snapshot.pieces.is_empty());
        assert!(snapshot.movements.is_empty());
    }

    #[test]
    fn test_parse_movement_row() {
        assert_eq!(parse_movement_row("[2025-10-18 19:13:04] 0 3 2 0 0"), Some(vec![0, 3, 2, 0, 0]));
        assert_eq!(parse_movement_row("new int[] { 0, 1 }"), None);
        assert_eq!(parse_movement_row("   "), None);
    }
}
