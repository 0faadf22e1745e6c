use keyfield_planner::{AnalysisRow, OptimizationResult, PlannerConfig, ScoredCandidate};

pub fn render_optimization_report(config: &PlannerConfig, out: &OptimizationResult) -> String {
    let mut md = String::new();
    md.push_str("# Field placement\n\n");
    md.push_str("| field | content | chars | points |\n");
    md.push_str("|---|---|---:|---:|\n");
    for (id, field) in out.fields() {
        let capacity = config.field(id).capacity;
        md.push_str(&format!(
            "| `{}` | {} | `{}/{}` | `{:.2}` |\n",
            id,
            escape_cell(&field.content),
            field.chars_used,
            capacity,
            field.points
        ));
    }
    md.push_str(&format!("\n- Total points: `{:.2}`\n", out.total_points));
    md
}

pub fn render_pool_report(pool: &[ScoredCandidate], limit: Option<usize>) -> String {
    let mut md = String::new();
    md.push_str(&format!("# Working pool ({} candidates)\n\n", pool.len()));
    md.push_str("| # | keyword | base | field1/2 | field3 |\n");
    md.push_str("|---:|---|---:|---:|---:|\n");
    let shown = limit.unwrap_or(pool.len());
    for (rank, candidate) in pool.iter().take(shown).enumerate() {
        md.push_str(&format!(
            "| {} | {} | `{:.2}` | `{:.2}` | `{:.2}` |\n",
            rank + 1,
            escape_cell(&truncate_one_line(candidate.text(), 60)),
            candidate.base_points(),
            candidate.rewards.field1_points,
            candidate.rewards.field3_points
        ));
    }
    md
}

/// Phrase, its comma-joined words and the words missing from the reference
pub fn render_analysis_report(rows: &[AnalysisRow]) -> String {
    let mut md = String::new();
    md.push_str("| Phrase | Split Words | Status |\n");
    md.push_str("|---|---|---|\n");
    for row in rows {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            escape_cell(&truncate_one_line(&row.phrase, 120)),
            escape_cell(&row.split_words),
            escape_cell(&row.missing_words)
        ));
    }
    md
}

fn truncate_one_line(text: &str, max_chars: usize) -> String {
    let s = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if s.chars().count() <= max_chars {
        return s;
    }
    let truncated: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{truncated}…")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyfield_planner::{analyze, Allocator, KeywordCandidate};

    #[test]
    fn optimization_report_lists_every_field() {
        let config = PlannerConfig::default();
        let out = Allocator::new(config.clone()).optimize_placement(&[
            KeywordCandidate::new("seo tools", 90.0),
            KeywordCandidate::new("seo", 30.0),
        ]);

        let md = render_optimization_report(&config, &out);
        assert!(md.contains("| `field1` | seo tools | `9/29` | `2610.00` |"), "{md}");
        assert!(md.contains("| `field2` |  | `0/29` |"), "{md}");
        assert!(md.contains("| `field3` |  | `0/100` |"), "{md}");
        assert!(md.contains("Total points: `2610.00`"));
    }

    #[test]
    fn pool_report_honours_limit() {
        let pool = Allocator::new(PlannerConfig::without_expansion()).working_pool(&[
            KeywordCandidate::new("a", 1.0),
            KeywordCandidate::new("b", 2.0),
        ]);
        let md = render_pool_report(&pool, Some(1));
        assert!(md.contains("# Working pool (2 candidates)"));
        assert!(md.contains("| 1 | b |"));
        assert!(!md.contains("| 2 | a |"));
    }

    #[test]
    fn analysis_report_escapes_pipes() {
        let rows = analyze(&["red|blue car"], "car");
        let md = render_analysis_report(&rows);
        assert!(md.starts_with("| Phrase | Split Words | Status |"));
        assert!(md.contains("| red\\|blue car | red\\|blue,car | red\\|blue |"), "{md}");
    }

    #[test]
    fn truncate_one_line_collapses_whitespace() {
        assert_eq!(truncate_one_line("a\n b\tc", 10), "a b c");
        assert_eq!(truncate_one_line("abcdef", 4), "abc…");
    }
}
