use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use keyfield_planner::KeywordCandidate;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON when the first non-blank character is `[`, delimited rows otherwise
    Auto,
    /// `keyword<TAB>score` or `keyword,score` per line
    Delimited,
    /// `[{"keyword": "...", "finalScore": 1.5}, ...]`
    Json,
}

#[derive(Debug, Deserialize)]
struct KeywordRecord {
    keyword: String,
    #[serde(alias = "finalScore")]
    final_score: f64,
}

/// Read a whole input source; `None` or `-` means stdin
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read keywords from stdin")?;
            Ok(buffer)
        }
    }
}

/// Turn raw keyword input into validated candidates
pub fn parse_keywords(raw: &str, format: InputFormat) -> Result<Vec<KeywordCandidate>> {
    let format = match format {
        InputFormat::Auto if raw.trim_start().starts_with('[') => InputFormat::Json,
        InputFormat::Auto => InputFormat::Delimited,
        other => other,
    };

    let candidates = match format {
        InputFormat::Json => parse_json(raw)?,
        _ => parse_delimited(raw)?,
    };

    if candidates.is_empty() {
        bail!("No keywords found in input");
    }
    log::debug!("Parsed {} keywords ({format:?})", candidates.len());
    Ok(candidates)
}

fn parse_json(raw: &str) -> Result<Vec<KeywordCandidate>> {
    let records: Vec<KeywordRecord> =
        serde_json::from_str(raw).context("Invalid JSON keyword list")?;

    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            validate_row(&record.keyword, record.final_score)
                .with_context(|| format!("entry {}", idx + 1))
        })
        .collect()
}

fn parse_delimited(raw: &str) -> Result<Vec<KeywordCandidate>> {
    let mut candidates = Vec::new();

    for (idx, line) in raw.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || is_comment(line) {
            continue;
        }

        let split = if line.contains('\t') {
            line.rsplit_once('\t')
        } else {
            line.rsplit_once(',')
        };
        let Some((keyword, score)) = split else {
            bail!("line {line_no}: expected `keyword<TAB>score` or `keyword,score`");
        };

        let score = score.trim();
        let score: f64 = score
            .parse()
            .with_context(|| format!("line {line_no}: score {score:?} is not a number"))?;
        let candidate = validate_row(keyword, score).with_context(|| format!("line {line_no}"))?;
        candidates.push(candidate);
    }

    Ok(candidates)
}

/// `#` alone or followed by whitespace; `#1 seo tool` is a keyword
fn is_comment(line: &str) -> bool {
    line.strip_prefix('#')
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

fn validate_row(keyword: &str, score: f64) -> Result<KeywordCandidate> {
    let keyword = keyword.split_whitespace().collect::<Vec<_>>().join(" ");
    if keyword.is_empty() {
        bail!("keyword is empty");
    }
    if !score.is_finite() {
        bail!("score for {keyword:?} is not a finite number");
    }
    Ok(KeywordCandidate::new(keyword, score))
}

/// One phrase per line; lines are trimmed and blank lines dropped
pub fn parse_phrases(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
