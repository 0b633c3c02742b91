// ABOUTME: Turns raw model output into a ScenarioBatch, one scenario per non-empty line.
// ABOUTME: Strips list markers, drops blank lines, caps at the requested count, and numbers TC_1..TC_k.

use crate::scenario::ScenarioBatch;

/// Parse generated text into at most `count` scenarios for `area`.
///
/// Lines are trimmed, leading hyphen/space list markers are removed, and lines
/// left empty are skipped. Parsing is deterministic for the same input.
pub fn parse_scenarios(area: &str, raw: &str, count: usize) -> ScenarioBatch {
    let descriptions = raw
        .lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .take(count);

    let batch = ScenarioBatch::from_descriptions(area, descriptions);
    tracing::debug!(area, requested = count, parsed = batch.len(), "parsed scenario lines");
    batch
}

fn clean_line(line: &str) -> &str {
    line.trim().trim_start_matches(['-', ' ']).trim()
}
